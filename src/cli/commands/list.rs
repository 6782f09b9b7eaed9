use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::table::render_records;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date: date_arg,
        today,
    } = cmd
    {
        let filter = if *today {
            Some(date::today())
        } else {
            match date_arg {
                Some(s) => {
                    Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?)
                }
                None => None,
            }
        };

        let pool = DbPool::new(&cfg.database)?;
        let records = load_records(&pool.conn, filter.as_ref())?;

        if records.is_empty() {
            match filter {
                Some(d) => println!("No attendance records for {}", d),
                None => println!("No attendance records"),
            }
            return Ok(());
        }

        match filter {
            Some(d) => println!("📅 Attendance for {}:\n", d),
            None => println!("📅 All attendance records:\n"),
        }
        println!("{}", render_records(&records));
    }
    Ok(())
}
