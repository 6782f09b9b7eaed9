use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Commands;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let path = Config::config_file();
            let cfg = Config::load();

            println!("📄 Configuration file: {}\n", path.display());
            match serde_yaml::to_string(&cfg) {
                Ok(yaml) => println!("{}", yaml),
                Err(e) => info(format!("Cannot render configuration: {}", e)),
            }
        }
    }

    Ok(())
}
