use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    /// Directory holding the schedule and history records
    #[arg(long, short, global = true, default_value = "medcontrol")]
    pub store: PathBuf,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Schedule a medicine
    Add {
        /// Name of the medicine
        name: String,

        /// Time of day to be reminded, 24-hour HH:MM
        #[arg(long, short)]
        time: String,

        /// Dose, free text
        #[arg(long, short, default_value = "")]
        dose: String,

        /// Repeat daily instead of firing once
        #[arg(long, short)]
        repeat: bool,
    },
    /// List the scheduled medicines
    List,
    /// Mark a scheduled medicine as taken
    Take {
        /// Position of the medicine as printed by `list`
        position: usize,
    },
    /// Mark a scheduled medicine as skipped
    Skip {
        /// Position of the medicine as printed by `list`
        position: usize,
    },
    /// Remove every scheduled medicine (history is kept)
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Show the most recent history events
    History,
    /// Export the full history as a CSV file
    Export {
        /// Output file (default: medcontrol_historico_<date>.csv)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Run the reminder checker in the foreground
    Watch,
}
