pub mod department;
pub mod report;
pub mod user;

pub use department::Department;
pub use report::{Counters, NewReport, Report, ReportPayload};
pub use user::{LoginRequest, LoginResponse, User, UserDto};
