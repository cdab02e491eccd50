use glint_kernel::domain::codes::CodeFlag;
use glint_kernel::domain::race::Race;
use glint_kernel::store::ConfigHandle;
use tracing::{debug, info};

/// Registry of enabled fun-mode codes.
///
/// State lives in the shared configuration; every mutation goes through the handle and is
/// therefore persisted immediately.
#[derive(Debug, Clone)]
pub struct CodeService {
    config: ConfigHandle,
}

impl CodeService {
    #[must_use]
    pub const fn new(config: ConfigHandle) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ConfigHandle {
        &self.config
    }

    #[must_use]
    pub fn all_enabled(&self) -> CodeFlag {
        self.config.read(|cfg| cfg.enabled_codes)
    }

    /// `true` when every bit of `flag` is enabled.
    #[must_use]
    pub fn enabled(&self, flag: CodeFlag) -> bool {
        self.all_enabled().contains(flag)
    }

    /// `true` when at least one code of `mask` is enabled.
    #[must_use]
    pub fn any_enabled(&self, mask: CodeFlag) -> bool {
        self.all_enabled().intersects(mask)
    }

    #[must_use]
    pub fn masked(&self, mask: CodeFlag) -> CodeFlag {
        self.all_enabled() & mask
    }

    /// The race every player is forced into, [`Race::Unknown`] when no race code is active.
    #[must_use]
    pub fn race(&self) -> Race {
        Race::from_codes(self.all_enabled())
    }

    /// Enables or disables `flag` and persists the result.
    ///
    /// Enabling first clears every code in `flag.conflicts()`. The configuration is saved on
    /// every call, even when nothing changed.
    pub fn toggle(&self, flag: CodeFlag, enable: bool) {
        let cleared = self.config.update(|cfg| {
            if enable {
                let conflicts = flag.conflicts();
                let cleared = cfg.enabled_codes & conflicts;
                cfg.enabled_codes.remove(conflicts);
                cfg.enabled_codes.insert(flag);
                cleared
            } else {
                cfg.enabled_codes.remove(flag);
                CodeFlag::empty()
            }
        });

        debug!(code = flag.name(), enable, cleared = ?cleared, "Toggled fun-mode code");
    }

    /// Disables every code.
    pub fn reset(&self) {
        let previous = self.config.update(|cfg| std::mem::take(&mut cfg.enabled_codes));
        info!(previous = ?previous, "Disabled all fun-mode codes");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_kernel::domain::config::Configuration;
    use glint_kernel::store::MemoryStore;

    fn service(enabled: CodeFlag) -> CodeService {
        let cfg = Configuration { enabled_codes: enabled, ..Configuration::default() };
        CodeService::new(ConfigHandle::new(cfg, MemoryStore::default()))
    }

    #[test]
    fn race_follows_the_enabled_race_code() {
        let codes = service(CodeFlag::empty());
        assert_eq!(codes.race(), Race::Unknown);

        codes.toggle(CodeFlag::OOPS_MIQOTE, true);
        assert_eq!(codes.race(), Race::Miqote);

        codes.toggle(CodeFlag::OOPS_AU_RA, true);
        assert_eq!(codes.race(), Race::AuRa);
    }

    #[test]
    fn reset_clears_everything() {
        let codes = service(CodeFlag::SHIRTS | CodeFlag::CROWN);
        codes.reset();
        assert!(codes.all_enabled().is_empty());
    }

    #[test]
    fn disabling_leaves_other_codes_alone() {
        let codes = service(CodeFlag::SHIRTS | CodeFlag::INDIVIDUAL);
        codes.toggle(CodeFlag::SHIRTS, false);
        assert_eq!(codes.all_enabled(), CodeFlag::INDIVIDUAL);
    }
}
