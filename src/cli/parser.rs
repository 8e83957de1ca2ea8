use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rPresence
#[derive(Parser)]
#[command(
    name = "rpresence",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect event/cohort status and confirm attendance within its confirmation window",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Evaluate at a fixed local time instead of now
    #[arg(
        global = true,
        long = "at",
        help = "Evaluate at this local time: YYYY-MM-DD or \"YYYY-MM-DD HH:MM\""
    )]
    pub at: Option<String>,

    /// Confirmation policy preset (overrides the config file)
    #[arg(
        global = true,
        long = "policy",
        help = "Confirmation policy preset: standard, short, flat-48h"
    )]
    pub policy: Option<String>,

    /// Disable colored output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

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

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Lifecycle status of the events (and their cohorts) in a JSON file
    Status {
        #[arg(long = "file", short = 'f', help = "JSON file with one event or a list of events")]
        file: PathBuf,

        #[arg(long = "json", help = "Print machine-readable JSON")]
        json: bool,
    },

    /// Meetings of a cohort with the attendance state of one participant
    Meetings {
        #[arg(long = "file", short = 'f', help = "JSON file with one event or a list of events")]
        file: PathBuf,

        #[arg(long = "cohort", short = 'c', help = "Cohort (turma) id")]
        cohort: String,

        #[arg(long = "participant", short = 'p', help = "Participant (usuario) id")]
        participant: String,

        #[arg(long = "json", help = "Print machine-readable JSON")]
        json: bool,
    },

    /// Mark a participant present on one meeting day
    Confirm {
        #[arg(long = "file", short = 'f', help = "JSON file with one event or a list of events")]
        file: PathBuf,

        #[arg(long = "cohort", short = 'c', help = "Cohort (turma) id")]
        cohort: String,

        #[arg(long = "participant", short = 'p', help = "Participant (usuario) id")]
        participant: String,

        #[arg(long = "date", short = 'd', help = "Meeting day (YYYY-MM-DD)")]
        date: String,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "limit", default_value_t = 20, help = "Number of rows to show")]
        limit: usize,
    },
}
