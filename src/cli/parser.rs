use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for AttendMe
/// CLI application to record daily student attendance with SQLite
#[derive(Parser)]
#[command(
    name = "attendme",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: record daily student attendance and export it using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record attendance for one student
    Add {
        /// Student name
        name: String,

        /// Date of the entry (YYYY-MM-DD, defaults to today)
        #[arg(long = "date", help = "Date of the entry (YYYY-MM-DD, defaults to today)")]
        date: Option<String>,

        /// Attendance status (absent, here, excluded, travel)
        #[arg(
            long = "status",
            help = "Attendance status: absent, here, excluded, travel"
        )]
        status: Option<String>,
    },

    /// Show recorded attendance
    List {
        /// Show only entries for the given date (YYYY-MM-DD)
        #[arg(long = "date", help = "Filter by date (YYYY-MM-DD)")]
        date: Option<String>,

        /// Show only today's entries
        #[arg(long = "today", conflicts_with = "date", help = "Show only today's entries")]
        today: bool,
    },

    /// Delete an attendance record by id
    Del {
        /// Id of the record to delete (shown in the list grid)
        id: i64,
    },

    /// Export attendance data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute). Defaults to attendance_<today>.<ext>
        /// in the current directory.
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
