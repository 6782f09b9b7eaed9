use super::status::Status;
use chrono::NaiveDate;
use serde::Serialize;

/// One attendance entry for one student on one date.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub id: i64,              // ⇔ attendance.id (INTEGER PRIMARY KEY)
    pub student_name: String, // ⇔ attendance.student_name (TEXT NOT NULL)
    pub date: NaiveDate,      // ⇔ attendance.date (TEXT "YYYY-MM-DD")
    pub status: Status,       // ⇔ attendance.status ('Absent'|'Here'|'Excluded'|'Travel')
}

impl Record {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
