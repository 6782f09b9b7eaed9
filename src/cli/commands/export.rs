use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let written = ExportLogic::export(&pool, format, file.as_deref(), *force)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            &written.display().to_string(),
            "attendance exported",
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
    Ok(())
}
