use crate::core::confirmation::{ConfirmationRequest, WriteStatus};
use crate::errors::AppResult;
use crate::models::attendance::{AttendanceRecord, parse_timestamp};
use chrono::NaiveDate;
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

pub fn map_row(row: &Row) -> Result<AttendanceRecord> {
    let date_str: String = row.get("data")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            format!("invalid date '{date_str}'").into(),
        )
    })?;

    let confirmed: Option<String> = row.get("confirmado_em")?;

    Ok(AttendanceRecord {
        cohort_id: row.get("turma_id")?,
        participant_id: row.get("usuario_id")?,
        date,
        present: row.get::<_, i64>("presente")? == 1,
        confirmed_at: confirmed.as_deref().and_then(parse_timestamp),
    })
}

/// All presence rows of one cohort, ordered by day.
pub fn load_by_cohort(conn: &Connection, cohort_id: &str) -> AppResult<Vec<AttendanceRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM presencas
         WHERE turma_id = ?1
         ORDER BY data ASC, usuario_id ASC",
    )?;

    let rows = stmt.query_map([cohort_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[cfg(test)]
pub fn count_rows(conn: &Connection, cohort_id: &str, participant_id: &str, date: NaiveDate) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM presencas WHERE turma_id = ?1 AND usuario_id = ?2 AND data = ?3",
        params![cohort_id, participant_id, date.format("%Y-%m-%d").to_string()],
        |r| r.get(0),
    )?;
    Ok(n)
}

/// Mark a participant present. A row that is already present is left alone
/// and reported as a conflict; an existing absent row is upgraded.
pub fn confirm_presence(conn: &Connection, req: &ConfirmationRequest) -> AppResult<WriteStatus> {
    let changed = conn.execute(
        "INSERT INTO presencas (turma_id, usuario_id, data, presente, confirmado_em)
         VALUES (?1, ?2, ?3, 1, ?4)
         ON CONFLICT (turma_id, usuario_id, data)
         DO UPDATE SET presente = 1, confirmado_em = excluded.confirmado_em
         WHERE presencas.presente = 0",
        params![
            req.cohort_id,
            req.participant_id,
            req.date.format("%Y-%m-%d").to_string(),
            req.requested_at.to_rfc3339(),
        ],
    )?;

    Ok(if changed == 0 {
        WriteStatus::Conflict
    } else {
        WriteStatus::Created
    })
}

/// Store an explicit absence.
#[cfg(test)]
pub fn insert_absent(conn: &Connection, cohort_id: &str, participant_id: &str, date: NaiveDate) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO presencas (turma_id, usuario_id, data, presente)
         VALUES (?1, ?2, ?3, 0)",
        params![cohort_id, participant_id, date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(())
}
