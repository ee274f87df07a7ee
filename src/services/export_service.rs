//! Spreadsheet export of workforce reports
//!
//! Renders the full report set into a single-sheet `.xlsx` workbook held in
//! memory. The column layout is fixed; department codes are shown with their
//! display labels.

use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};

use crate::{
    error::Result,
    models::{department, report::Report},
};

pub const SHEET_NAME: &str = "Báo Cáo Nhân Sự";

pub const CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Column headers, in output order
pub const HEADERS: [&str; 12] = [
    "ID",
    "Bộ Phận",
    "Ngày",
    "Số Lượng Nhân Viên",
    "Hộ Sản",
    "Phép Khác",
    "Thực Tế Làm",
    "Trực Tiếp",
    "Gián Tiếp",
    "Cho Mượn",
    "Số Người Tăng Ca",
    "Số Lượng Điện Thoại",
];

const MIN_COLUMN_WIDTH: usize = 10;
const COLUMN_PADDING: usize = 2;
const HEADER_FILL: u32 = 0xE3F2FD;

/// A single rendered cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(i64),
}

impl CellValue {
    /// Display width in characters
    fn width(&self) -> usize {
        match self {
            CellValue::Text(s) => s.chars().count(),
            CellValue::Number(n) => n.to_string().len(),
        }
    }
}

/// Map a report onto the export columns
pub fn report_row(report: &Report) -> Vec<CellValue> {
    let mut row = Vec::with_capacity(HEADERS.len());
    row.push(CellValue::Number(report.id));
    row.push(CellValue::Text(department::label(&report.department).to_string()));
    row.push(CellValue::Text(report.date.format("%Y-%m-%d").to_string()));
    row.extend(
        report
            .counters
            .values()
            .into_iter()
            .map(|v| CellValue::Number(i64::from(v))),
    );
    row
}

/// Width for each column: the longest value (header included), with a floor
/// for narrow columns and some padding otherwise.
pub fn column_widths(rows: &[Vec<CellValue>]) -> Vec<f64> {
    HEADERS
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let longest = rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(CellValue::width)
                .fold(header.chars().count(), usize::max);

            if longest < MIN_COLUMN_WIDTH {
                MIN_COLUMN_WIDTH as f64
            } else {
                (longest + COLUMN_PADDING) as f64
            }
        })
        .collect()
}

/// Render reports into workbook bytes.
///
/// The whole document is built before anything is returned, so a failure
/// never leaves a partial file behind.
pub fn export_reports(reports: &[Report]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    let rows: Vec<Vec<CellValue>> = reports.iter().map(report_row).collect();
    for (idx, row) in rows.iter().enumerate() {
        let row_num = 1 + idx as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                CellValue::Text(s) => worksheet.write(row_num, col as u16, s)?,
                CellValue::Number(n) => worksheet.write(row_num, col as u16, *n as f64)?,
            };
        }
    }

    for (col, width) in column_widths(&rows).into_iter().enumerate() {
        worksheet.set_column_width(col as u16, width)?;
    }

    let buffer = workbook.save_to_buffer()?;
    tracing::debug!(
        "Exported {} reports ({} bytes)",
        reports.len(),
        buffer.len()
    );

    Ok(buffer)
}

/// Attachment name for an export generated on `date`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("bao-cao-nhan-su-{}.xlsx", date.format("%Y-%m-%d"))
}
