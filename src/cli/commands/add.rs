use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_record, load_records};
use crate::errors::{AppError, AppResult};
use crate::models::status::Status;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::table::render_records;

/// Record attendance for one student.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, date, status } = cmd {
        //
        // 1. Name must be non-empty (the only validation; no roster check)
        //
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyStudentName);
        }

        //
        // 2. Parse date (defaults to today, but freely settable)
        //
        let d = match date {
            Some(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Err(AppError::InvalidDate(String::from("(empty)")));
                }
                date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?
            }
            None => date::today(),
        };

        //
        // 3. Parse status (default from config)
        //
        let status_final = match status {
            Some(code) => Status::from_input(code).ok_or_else(|| {
                AppError::InvalidStatus(format!(
                    "'{}'. Use one of: absent, here, excluded, travel",
                    code
                ))
            })?,
            None => Status::from_input(&cfg.default_status).unwrap_or(Status::Absent),
        };

        //
        // 4. Insert and refresh the grid filtered to the entered date
        //
        let pool = DbPool::new(&cfg.database)?;

        let id = insert_record(&pool.conn, name, &d, status_final)?;

        success(format!(
            "Recorded {} as {} on {} (id {})",
            name,
            status_final.to_db_str(),
            d,
            id
        ));

        if let Err(e) = ttlog(
            &pool.conn,
            "add",
            &id.to_string(),
            &format!("{} {} {}", name, d, status_final.to_db_str()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        let records = load_records(&pool.conn, Some(&d))?;
        println!("\n{}", render_records(&records));
    }

    Ok(())
}
