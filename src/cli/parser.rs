use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftgantt
/// CLI application to turn activity schedules into Gantt timeline charts
#[derive(Parser)]
#[command(
    name = "shiftgantt",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple schedule-to-Gantt CLI: validate activity schedules and render timeline charts",
    long_about = None
)]
pub struct Cli {
    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Inspect a schedule file: decode, validate the schema, report date anomalies
    Check {
        /// Path to the schedule file (.csv, .xlsx or .xls)
        file: String,
    },

    /// Build the Gantt timeline chart from a schedule file
    Chart {
        /// Path to the schedule file (.csv, .xlsx or .xls)
        file: String,

        /// Window start (DD/MM/YYYY HH:MM)
        #[arg(long = "from", value_name = "DATETIME")]
        from: String,

        /// Window end (DD/MM/YYYY HH:MM)
        #[arg(long = "to", value_name = "DATETIME")]
        to: String,

        /// Output HTML file (defaults to the configured one)
        #[arg(long, value_name = "FILE")]
        output: Option<String>,

        /// Keep only activities whose number starts with this prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Seed for the resource color wheel
        #[arg(long = "color-seed", value_name = "N")]
        color_seed: Option<u64>,

        /// Overwrite the output file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },
}
