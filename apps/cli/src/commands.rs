use glint_codes::{CodePanel, CodeService, CodesErrorExt};
use glint_kernel::actors::{Actor, ActorTable, StateApplier, StateSource};
use glint_kernel::domain::codes::CodeFlag;
use glint_kernel::domain::race::Race;
use tracing::info;

/// Stands in for the host's state manager: the CLI has no game to redraw.
#[derive(Debug, Clone, Copy)]
pub struct TraceApplier;

impl StateApplier for TraceApplier {
    fn reapply(&self, actor: &Actor, force: bool, source: StateSource) {
        info!(actor = %actor.name, id = actor.id.0, force, ?source, "Reapplied state");
    }
}

pub fn list<A: ActorTable, S: StateApplier>(panel: &CodePanel<A, S>, all: bool) {
    let entries = if all { panel.entries_including_debug(true) } else { panel.entries() };

    for entry in entries {
        let mark = if entry.enabled { 'x' } else { ' ' };
        let ident = entry.flag.ident().unwrap_or_default();
        println!("[{mark}] {ident:<14} {:<24} {}", entry.name, entry.description);
    }
}

pub fn status(codes: &CodeService) {
    let enabled = codes.all_enabled();
    if enabled.is_empty() {
        println!("No fun-mode codes enabled.");
        return;
    }

    for flag in CodeFlag::codes().filter(|flag| enabled.contains(*flag)) {
        println!("{:<14} {}", flag.ident().unwrap_or_default(), flag.name());
    }
    match codes.race() {
        Race::Unknown => {},
        race => println!("Forced race: {race:?}"),
    }
}

pub fn set<A: ActorTable, S: StateApplier>(
    panel: &CodePanel<A, S>,
    names: &[String],
    enabled: bool,
) -> anyhow::Result<()> {
    let flags = names
        .iter()
        .map(|name| CodePanel::<A, S>::resolve(name))
        .collect::<Result<Vec<_>, _>>()
        .context("Use `glint list --all` to see the known codes")?;

    for flag in flags {
        panel.set(flag, enabled);
        println!("{} {}", if enabled { "Enabled" } else { "Disabled" }, flag.name());
    }
    Ok(())
}
