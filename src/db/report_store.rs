use chrono::NaiveDate;

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::report::{NewReport, Report},
};

pub const DEFAULT_RECENT_LIMIT: u32 = 10;

const SELECT_REPORTS: &str = r#"
    SELECT id, department, date,
           employee_count, maternity_leave, other_leave, actual_worked,
           direct_labor, indirect_labor, loaned_out, overtime_workers, phone_count
    FROM reports
"#;

/// Report store for database operations
#[derive(Clone)]
pub struct ReportStore {
    pool: DbPool,
}

impl ReportStore {
    /// Create a new ReportStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create or update the report for a (department, date) pair.
    ///
    /// Runs as a single statement against the unique index on
    /// `(department, date)`, so concurrent submissions for the same pair
    /// collapse onto one row and the last write wins. An existing row keeps
    /// its id and gets all nine counters replaced.
    pub async fn upsert_report(&self, report: &NewReport) -> Result<Report> {
        let c = &report.counters;
        let saved = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports (
                department, date,
                employee_count, maternity_leave, other_leave, actual_worked,
                direct_labor, indirect_labor, loaned_out, overtime_workers, phone_count
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(department, date) DO UPDATE SET
                employee_count = excluded.employee_count,
                maternity_leave = excluded.maternity_leave,
                other_leave = excluded.other_leave,
                actual_worked = excluded.actual_worked,
                direct_labor = excluded.direct_labor,
                indirect_labor = excluded.indirect_labor,
                loaned_out = excluded.loaned_out,
                overtime_workers = excluded.overtime_workers,
                phone_count = excluded.phone_count
            RETURNING id, department, date,
                employee_count, maternity_leave, other_leave, actual_worked,
                direct_labor, indirect_labor, loaned_out, overtime_workers, phone_count
            "#,
        )
        .bind(&report.department)
        .bind(report.date)
        .bind(c.employee_count)
        .bind(c.maternity_leave)
        .bind(c.other_leave)
        .bind(c.actual_worked)
        .bind(c.direct_labor)
        .bind(c.indirect_labor)
        .bind(c.loaned_out)
        .bind(c.overtime_workers)
        .bind(c.phone_count)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        tracing::info!(
            "Saved report {} for {} on {}",
            saved.id,
            saved.department,
            saved.date
        );

        Ok(saved)
    }

    /// Get every report, most recent date first
    pub async fn list_all(&self) -> Result<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>(&format!(
            "{SELECT_REPORTS} ORDER BY date DESC, department ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(reports)
    }

    /// Get the `limit` most recently dated reports, in `list_all` order
    pub async fn list_recent(&self, limit: u32) -> Result<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>(&format!(
            "{SELECT_REPORTS} ORDER BY date DESC, department ASC, id ASC LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(reports)
    }

    /// Get all reports for one date, ordered by department
    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>(&format!(
            "{SELECT_REPORTS} WHERE date = ? ORDER BY department ASC"
        ))
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(reports)
    }

    /// Get all reports for one department, most recent date first
    pub async fn list_by_department(&self, department: &str) -> Result<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>(&format!(
            "{SELECT_REPORTS} WHERE department = ? ORDER BY date DESC"
        ))
        .bind(department)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(reports)
    }

    /// Get the report for an exact (department, date) pair
    pub async fn find_by_department_and_date(
        &self,
        department: &str,
        date: NaiveDate,
    ) -> Result<Option<Report>> {
        let report = sqlx::query_as::<_, Report>(&format!(
            "{SELECT_REPORTS} WHERE department = ? AND date = ?"
        ))
        .bind(department)
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(report)
    }
}
