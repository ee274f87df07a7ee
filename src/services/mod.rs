pub mod export_service;

pub use export_service::{export_file_name, export_reports};
