use clap::{ArgAction, Parser, Subcommand};
use glint_logger::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "glint", version, about = "Manage fun-mode codes", long_about = None)]
pub struct Cli {
    /// Configuration file holding the enabled codes.
    #[arg(short, long, global = true, default_value = "glint.toml")]
    pub config: PathBuf,

    /// Tracked actor to refresh after a change (repeatable).
    #[arg(short, long = "actor", global = true, value_name = "NAME")]
    pub actors: Vec<String>,

    /// More output per occurrence (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub const fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the codes with their state.
    List {
        /// Also list the debug codes.
        #[arg(long)]
        all: bool,
    },
    /// Show the enabled codes and the forced race.
    Status {},
    /// Enable codes, clearing whatever they conflict with.
    Enable {
        #[arg(required = true, value_name = "CODE")]
        codes: Vec<String>,
    },
    /// Disable codes.
    Disable {
        #[arg(required = true, value_name = "CODE")]
        codes: Vec<String>,
    },
    /// Disable every code.
    Reset {},
}
