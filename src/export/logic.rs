// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::writers::{export_csv, export_json};
use crate::utils::date;

use std::path::{Path, PathBuf};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the full attendance table.
    ///
    /// - `format`: csv | json
    /// - `file`: output path; must be absolute when given, otherwise
    ///   `attendance_<today>.<ext>` in the current directory is used
    /// - `force`: overwrite an existing file without asking
    ///
    /// Exporting an empty table is an error: no file is written.
    /// Returns the path of the written file.
    pub fn export(
        pool: &DbPool,
        format: &ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => {
                let p = Path::new(f);
                if !p.is_absolute() {
                    return Err(AppError::Export(format!(
                        "Output file path must be absolute: {f}"
                    )));
                }
                p.to_path_buf()
            }
            None => default_filename(format),
        };

        let records = load_records(&pool.conn, None)?;
        if records.is_empty() {
            return Err(AppError::NoRecords);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&records, &path)?,
            ExportFormat::Json => export_json(&records, &path)?,
        }

        Ok(path)
    }
}

/// `attendance_<today>.<ext>` in the current directory.
fn default_filename(format: &ExportFormat) -> PathBuf {
    PathBuf::from(format!(
        "attendance_{}.{}",
        date::today_str(),
        format.as_str()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filename_carries_date_and_extension() {
        let p = default_filename(&ExportFormat::Csv);
        let name = p.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("attendance_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(name.len(), "attendance_YYYY-MM-DD.csv".len());
    }
}
