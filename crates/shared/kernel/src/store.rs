//! Persistence of the process-wide [`Configuration`].
//!
//! The toggle registry never talks to the filesystem directly: it mutates the configuration
//! through a [`ConfigHandle`], which saves through whatever [`ConfigStore`] the composition
//! root injected.

use glint_domain::config::Configuration;
use parking_lot::{Mutex, RwLock};
use std::borrow::Cow;
use std::fmt::Debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Errors raised by a [`ConfigStore`].
#[glint_derive::glint_error]
pub enum StoreError {
    #[error("Configuration I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Configuration encoding failure{}: {source}", format_context(.context))]
    Encode { source: toml::ser::Error, context: Option<Cow<'static, str>> },

    #[error("Internal store error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Destination of configuration snapshots.
pub trait ConfigStore: Debug + Send + Sync {
    /// Persists a full snapshot of `config`.
    ///
    /// # Errors
    /// Implementation specific; callers treat saving as best effort.
    fn save(&self, config: &Configuration) -> Result<(), StoreError>;
}

/// Stores the configuration as a TOML file.
///
/// Writes are atomic: the snapshot goes to a temporary file in the same directory, is
/// synced, then renamed over the target.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        self.path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."))
    }
}

impl ConfigStore for TomlFileStore {
    fn save(&self, config: &Configuration) -> Result<(), StoreError> {
        let body = toml::to_string_pretty(config).context("Failed to encode configuration")?;

        let dir = self.directory();
        fs::create_dir_all(dir)
            .context(format!("Failed to create config directory: {}", dir.display()))?;

        let mut tmp = NamedTempFile::new_in(dir).context("Failed to create temporary file")?;
        tmp.write_all(body.as_bytes()).context("Failed to write temporary file")?;
        tmp.as_file().sync_all().context("Failed to sync temporary file")?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .context(format!("Failed to replace {}", self.path.display()))?;

        debug!(path = %self.path.display(), "Configuration saved");
        Ok(())
    }
}

/// Keeps the last snapshot in memory and counts saves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    last: Mutex<Option<Configuration>>,
    saves: AtomicUsize,
    failing: bool,
}

impl MemoryStore {
    /// A store whose every save fails after being counted.
    #[must_use]
    pub fn failing() -> Self {
        Self { failing: true, ..Self::default() }
    }

    /// Number of save attempts so far.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }

    /// The last successfully saved snapshot.
    #[must_use]
    pub fn last(&self) -> Option<Configuration> {
        self.last.lock().clone()
    }
}

impl ConfigStore for MemoryStore {
    fn save(&self, config: &Configuration) -> Result<(), StoreError> {
        self.saves.fetch_add(1, Ordering::Relaxed);
        if self.failing {
            return Err("memory store is configured to fail".into());
        }
        *self.last.lock() = Some(config.clone());
        Ok(())
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for Arc<S> {
    fn save(&self, config: &Configuration) -> Result<(), StoreError> {
        (**self).save(config)
    }
}

/// Shared, persisted configuration owned by the composition root.
///
/// The handle keeps two layers: the runtime view every reader sees, and the persisted
/// layer that reaches the store. They only differ when the runtime view was started with
/// overrides (see [`ConfigHandle::with_overrides`]); edits are replayed on both, so an
/// override never ends up on disk unless it is edited.
///
/// Cloning is cheap; all clones see the same state and the same store.
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    layers: Arc<RwLock<Layers>>,
    store: Arc<dyn ConfigStore>,
}

#[derive(Debug)]
struct Layers {
    runtime: Configuration,
    persisted: Configuration,
}

impl ConfigHandle {
    pub fn new(config: Configuration, store: impl ConfigStore + 'static) -> Self {
        Self::with_overrides(config.clone(), config, store)
    }

    /// Starts from the stored `persisted` configuration while readers see `runtime`.
    pub fn with_overrides(
        persisted: Configuration,
        runtime: Configuration,
        store: impl ConfigStore + 'static,
    ) -> Self {
        Self { layers: Arc::new(RwLock::new(Layers { runtime, persisted })), store: Arc::new(store) }
    }

    /// Runs `f` against the runtime configuration.
    pub fn read<R>(&self, f: impl FnOnce(&Configuration) -> R) -> R {
        f(&self.layers.read().runtime)
    }

    #[must_use]
    pub fn snapshot(&self) -> Configuration {
        self.layers.read().runtime.clone()
    }

    /// The configuration as it is handed to the store.
    #[must_use]
    pub fn persisted(&self) -> Configuration {
        self.layers.read().persisted.clone()
    }

    /// Applies `f` to both layers and saves the persisted one, whether or not anything
    /// changed. Returns what `f` returned for the runtime view.
    ///
    /// The write lock is held until the store returns, so concurrent updates reach the store
    /// in the order they were applied.
    pub fn update<R>(&self, f: impl Fn(&mut Configuration) -> R) -> R {
        let mut layers = self.layers.write();
        let result = f(&mut layers.runtime);
        f(&mut layers.persisted);
        self.persist(&layers.persisted);
        result
    }

    /// Saves the persisted configuration.
    pub fn save(&self) {
        let layers = self.layers.read();
        self.persist(&layers.persisted);
    }

    // Fire and forget: a failed save is logged and never reaches the caller.
    fn persist(&self, snapshot: &Configuration) {
        if let Err(err) = self.store.save(snapshot) {
            warn!(error = %err, "Failed to persist configuration");
        }
    }
}
