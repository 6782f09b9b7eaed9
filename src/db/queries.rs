use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::models::status::Status;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

/// Insert one attendance record and return the assigned id.
pub fn insert_record(
    conn: &Connection,
    student_name: &str,
    date: &NaiveDate,
    status: Status,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO attendance (student_name, date, status)
         VALUES (?1, ?2, ?3)",
        params![
            student_name,
            date.format("%Y-%m-%d").to_string(),
            status.to_db_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete one attendance record by id. Returns the number of rows
/// removed (zero or one), so callers can report an unknown id.
pub fn delete_record(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM attendance WHERE id = ?1", [id])?;
    Ok(n)
}

/// Load attendance records, optionally filtered to a single date.
/// Ordered by date descending; ties resolved by id so output is stable.
pub fn load_records(conn: &Connection, date_filter: Option<&NaiveDate>) -> AppResult<Vec<Record>> {
    let mut out = Vec::new();

    match date_filter {
        Some(d) => {
            let mut stmt = conn.prepare(
                "SELECT id, student_name, date, status FROM attendance
                 WHERE date = ?1
                 ORDER BY date DESC, id ASC",
            )?;
            let date_str = d.format("%Y-%m-%d").to_string();
            let rows = stmt.query_map([date_str], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, student_name, date, status FROM attendance
                 ORDER BY date DESC, id ASC",
            )?;
            let rows = stmt.query_map([], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn map_row(row: &Row) -> Result<Record> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = Status::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(Record {
        id: row.get("id")?,
        student_name: row.get("student_name")?,
        date,
        status,
    })
}

/// Load internal audit rows, newest first.
pub fn load_log(conn: &Connection) -> Result<Vec<(String, String, String)>> {
    let mut stmt =
        conn.prepare("SELECT date, operation, message FROM log ORDER BY date DESC, id DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
