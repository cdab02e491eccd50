use crate::error::CodesError;
use crate::service::CodeService;
use glint_kernel::actors::{ActorTable, StateApplier, StateSource};
use glint_kernel::domain::codes::CodeFlag;
use tracing::debug;

/// Header tooltip of the fun-mode section.
pub const TOOLTIP: &str = "Fun Modes allow for some easter-egg features that usually manipulate \
                           the appearance of all players you see (including yourself) in some way.";

/// One row of the toggle panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub flag: CodeFlag,
    pub name: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

/// The fun-mode toggle panel without any drawing.
///
/// Every change is followed by a forced re-application of state on all valid actors, so the
/// new codes become visible immediately.
#[derive(Debug)]
pub struct CodePanel<A, S> {
    codes: CodeService,
    actors: A,
    applier: S,
}

impl<A: ActorTable, S: StateApplier> CodePanel<A, S> {
    pub const fn new(codes: CodeService, actors: A, applier: S) -> Self {
        Self { codes, actors, applier }
    }

    #[must_use]
    pub const fn codes(&self) -> &CodeService {
        &self.codes
    }

    /// Lists the codes in bit order. Debug codes only show up when the configuration asks
    /// for them.
    #[must_use]
    pub fn entries(&self) -> Vec<CodeEntry> {
        self.entries_including_debug(self.show_debug_codes())
    }

    #[must_use]
    pub fn entries_including_debug(&self, include_debug: bool) -> Vec<CodeEntry> {
        let enabled = self.codes.all_enabled();
        let hidden = if include_debug { CodeFlag::empty() } else { CodeFlag::DEBUG_CODES };

        CodeFlag::codes()
            .filter(|flag| !hidden.contains(*flag))
            .map(|flag| CodeEntry {
                flag,
                name: flag.name(),
                description: flag.description(),
                enabled: enabled.contains(flag),
            })
            .collect()
    }

    /// Applies a checkbox change and redraws. Returns the number of refreshed actors.
    pub fn set(&self, flag: CodeFlag, enabled: bool) -> usize {
        self.codes.toggle(flag, enabled);
        self.force_redraw_all()
    }

    /// Resolves a code through [`CodeFlag::lookup`].
    ///
    /// # Errors
    /// Returns [`CodesError::UnknownCode`] if `name` matches no code.
    pub fn resolve(name: &str) -> Result<CodeFlag, CodesError> {
        CodeFlag::lookup(name).ok_or_else(|| CodesError::UnknownCode {
            message: name.to_owned().into(),
            context: None,
        })
    }

    /// Like [`CodePanel::set`], resolving the code first.
    ///
    /// # Errors
    /// Returns [`CodesError::UnknownCode`] if `name` matches no code; nothing is changed.
    pub fn set_by_name(&self, name: &str, enabled: bool) -> Result<CodeFlag, CodesError> {
        let flag = Self::resolve(name)?;
        self.set(flag, enabled);
        Ok(flag)
    }

    /// Re-applies the state of every valid actor. Returns how many were refreshed.
    pub fn force_redraw_all(&self) -> usize {
        let mut refreshed = 0;
        for actor in self.actors.actors().iter().filter(|a| a.valid) {
            self.applier.reapply(actor, true, StateSource::Manual);
            refreshed += 1;
        }
        debug!(refreshed, "Forced redraw after fun-mode change");
        refreshed
    }

    fn show_debug_codes(&self) -> bool {
        self.codes.config().read(|cfg| cfg.show_debug_codes)
    }
}
