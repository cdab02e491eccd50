#![allow(clippy::print_stdout)]

mod args;
mod commands;

use crate::args::{Cli, Commands};
use anyhow::Context;
use clap::Parser;
use glint_codes::{CodePanel, CodeService};
use glint_kernel::actors::{Actor, ActorRoster};
use glint_kernel::config::{load_config, load_file_config};
use glint_kernel::domain::config::Configuration;
use glint_kernel::store::{ConfigHandle, TomlFileStore};
use glint_logger::Logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::builder(env!("CARGO_PKG_NAME")).level(cli.level()).init()?;

    let persisted: Configuration =
        load_file_config(Some(&cli.config)).context("Critical: Configuration is malformed")?;
    let runtime: Configuration =
        load_config(Some(&cli.config)).context("Critical: Environment overrides are malformed")?;
    let handle =
        ConfigHandle::with_overrides(persisted, runtime, TomlFileStore::new(&cli.config));

    let roster = ActorRoster::new((0..).zip(&cli.actors).map(|(id, name)| Actor::new(id, name)));
    let panel = CodePanel::new(CodeService::new(handle), roster, commands::TraceApplier);

    match cli.command {
        Commands::List { all } => commands::list(&panel, all),
        Commands::Status {} => commands::status(panel.codes()),
        Commands::Enable { codes } => commands::set(&panel, &codes, true)?,
        Commands::Disable { codes } => commands::set(&panel, &codes, false)?,
        Commands::Reset {} => {
            panel.codes().reset();
            panel.force_redraw_all();
        },
    }

    Ok(())
}
