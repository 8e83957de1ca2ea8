use crate::core::confirmation::{AttendanceService, ConfirmationRequest, WriteStatus};
use crate::db::log::ttlog;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::attendance::AttendanceIndex;
use rusqlite::Connection;

/// [`AttendanceService`] over a local SQLite database.
pub struct SqliteAttendanceService<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteAttendanceService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Fresh index of one cohort's records, to be re-read after every write.
    pub fn index_for(&self, cohort_id: &str) -> AppResult<AttendanceIndex> {
        Ok(AttendanceIndex::from_records(queries::load_by_cohort(
            self.conn, cohort_id,
        )?))
    }
}

impl AttendanceService for SqliteAttendanceService<'_> {
    /// The presence row and its audit line are written together or not at all.
    fn confirm(&mut self, request: &ConfirmationRequest) -> AppResult<WriteStatus> {
        let tx = self.conn.unchecked_transaction()?;
        let status = queries::confirm_presence(&tx, request)?;

        if status == WriteStatus::Created {
            ttlog(
                &tx,
                "confirm",
                &format!("{}/{}", request.cohort_id, request.participant_id),
                &format!("present on {}", request.date),
            )?;
        }

        tx.commit()?;
        Ok(status)
    }
}
