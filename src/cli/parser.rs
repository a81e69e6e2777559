use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rInternHours
#[derive(Parser)]
#[command(
    name = "rinternhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rebuild intern work sessions from clock-in/out logs and report internship progress",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file written by init)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration directory and a default configuration file
    Init,

    /// Inspect or upgrade the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List keys missing from the configuration file")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing keys with their default values")]
        migrate: bool,
    },

    /// Show reconstructed sessions with regular/overtime split
    Sessions {
        #[arg(long, short = 's', help = "Snapshot JSON file (logs + edit requests)")]
        snapshot: Option<String>,

        #[arg(long, short = 'o', help = "Only this owner")]
        owner: Option<String>,

        #[arg(long, short = 'p', help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "as-of", help = "Instant open sessions are measured to (default: now)")]
        as_of: Option<String>,

        #[arg(long = "freeze-at", help = "Stop open sessions at this instant")]
        freeze_at: Option<String>,

        #[arg(long = "with-edits", help = "Apply approved edit requests first")]
        with_edits: bool,
    },

    /// Report internship progress for one owner
    Progress {
        #[arg(long, short = 's', help = "Snapshot JSON file (logs + edit requests)")]
        snapshot: Option<String>,

        #[arg(long, short = 'o')]
        owner: String,

        #[arg(long, help = "Required internship hours (default: from config)")]
        required: Option<f64>,

        #[arg(long = "with-edits", help = "Apply approved edit requests first")]
        with_edits: bool,

        #[arg(long, help = "Print the progress as JSON")]
        json: bool,
    },

    /// Export daily time record rows
    Export {
        #[arg(long, short = 's', help = "Snapshot JSON file (logs + edit requests)")]
        snapshot: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'o')]
        owner: Option<String>,

        #[arg(long, short = 'p', value_name = "RANGE")]
        period: Option<String>,

        #[arg(long = "as-of")]
        as_of: Option<String>,

        #[arg(long = "with-edits")]
        with_edits: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
