// src/export/writers.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::record::Record;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Fixed CSV header: ID, Student Name, Date, Status.
pub(crate) const CSV_HEADERS: [&str; 4] = ["ID", "Student Name", "Date", "Status"];

/// Export CSV: header plus one line per record.
pub(crate) fn export_csv(records: &[Record], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(CSV_HEADERS)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for r in records {
        wtr.write_record([
            r.id.to_string(),
            r.student_name.clone(),
            r.date_str(),
            r.status.to_db_str().to_string(),
        ])
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[Record], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
