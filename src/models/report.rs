use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{AppError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Database report model, one row per department per date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Report {
    pub id: i64,
    pub department: String,
    pub date: NaiveDate,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub counters: Counters,
}

/// The nine daily headcount figures of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Counters {
    #[serde(rename = "soLuongNhanVien")]
    pub employee_count: i32,
    #[serde(rename = "hoSan")]
    pub maternity_leave: i32,
    #[serde(rename = "phepKhac")]
    pub other_leave: i32,
    #[serde(rename = "thucTeLam")]
    pub actual_worked: i32,
    #[serde(rename = "trucTiep")]
    pub direct_labor: i32,
    #[serde(rename = "gianTiep")]
    pub indirect_labor: i32,
    #[serde(rename = "choMuon")]
    pub loaned_out: i32,
    #[serde(rename = "soNguoiTangCa")]
    pub overtime_workers: i32,
    #[serde(rename = "soLuongDienThoai")]
    pub phone_count: i32,
}

impl Counters {
    /// Counter values in export column order
    pub fn values(&self) -> [i32; 9] {
        [
            self.employee_count,
            self.maternity_leave,
            self.other_leave,
            self.actual_worked,
            self.direct_labor,
            self.indirect_labor,
            self.loaned_out,
            self.overtime_workers,
            self.phone_count,
        ]
    }
}

/// Report submission as received from a client. Every field is optional here
/// so that a missing department or date is reported as a validation error
/// instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportPayload {
    pub department: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "soLuongNhanVien")]
    pub employee_count: Option<i32>,
    #[serde(rename = "hoSan")]
    pub maternity_leave: Option<i32>,
    #[serde(rename = "phepKhac")]
    pub other_leave: Option<i32>,
    #[serde(rename = "thucTeLam")]
    pub actual_worked: Option<i32>,
    #[serde(rename = "trucTiep")]
    pub direct_labor: Option<i32>,
    #[serde(rename = "gianTiep")]
    pub indirect_labor: Option<i32>,
    #[serde(rename = "choMuon")]
    pub loaned_out: Option<i32>,
    #[serde(rename = "soNguoiTangCa")]
    pub overtime_workers: Option<i32>,
    #[serde(rename = "soLuongDienThoai")]
    pub phone_count: Option<i32>,
}

/// A validated report, ready to be upserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub department: String,
    pub date: NaiveDate,
    pub counters: Counters,
}

impl NewReport {
    pub fn new(department: impl Into<String>, date: NaiveDate, counters: Counters) -> Self {
        Self {
            department: department.into(),
            date,
            counters,
        }
    }
}

impl TryFrom<ReportPayload> for NewReport {
    type Error = AppError;

    fn try_from(payload: ReportPayload) -> Result<Self> {
        let department = payload
            .department
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| AppError::Validation("department is required".into()))?;

        let date = payload
            .date
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| AppError::Validation("date is required".into()))?;
        let date = parse_date(&date)?;

        let counters = Counters {
            employee_count: counter("soLuongNhanVien", payload.employee_count)?,
            maternity_leave: counter("hoSan", payload.maternity_leave)?,
            other_leave: counter("phepKhac", payload.other_leave)?,
            actual_worked: counter("thucTeLam", payload.actual_worked)?,
            direct_labor: counter("trucTiep", payload.direct_labor)?,
            indirect_labor: counter("gianTiep", payload.indirect_labor)?,
            loaned_out: counter("choMuon", payload.loaned_out)?,
            overtime_workers: counter("soNguoiTangCa", payload.overtime_workers)?,
            phone_count: counter("soLuongDienThoai", payload.phone_count)?,
        };

        Ok(Self {
            department,
            date,
            counters,
        })
    }
}

fn counter(field: &str, value: Option<i32>) -> Result<i32> {
    match value.unwrap_or(0) {
        v if v < 0 => Err(AppError::Validation(format!(
            "{} must not be negative",
            field
        ))),
        v => Ok(v),
    }
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        AppError::Validation(format!(
            "invalid date '{}', expected YYYY-MM-DD",
            value
        ))
    })
}
