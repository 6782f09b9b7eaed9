use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_record, load_records};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::table::render_records;

/// Delete one attendance record by id, then show the remaining records.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let removed = delete_record(&pool.conn, *id)?;
        if removed == 0 {
            return Err(AppError::RecordNotFound(*id));
        }

        success(format!("Record {} has been deleted.", id));

        if let Err(e) = ttlog(&pool.conn, "del", &id.to_string(), "record deleted") {
            warning(format!("Failed to write internal log: {}", e));
        }

        // Refresh unfiltered, like the grid after a delete
        let records = load_records(&pool.conn, None)?;
        if records.is_empty() {
            println!("No attendance records");
        } else {
            println!("\n{}", render_records(&records));
        }
    }

    Ok(())
}
