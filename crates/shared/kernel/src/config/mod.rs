use config::{Config, Environment, File, FileFormat};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// File read when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "glint.toml";

/// Prefix of environment overrides (`GLINT__ENABLED_CODES=8`).
pub const ENV_PREFIX: &str = "GLINT";

/// Custom error type for config loading.
#[glint_derive::glint_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads persisted settings with environment overrides on top.
///
/// Layers, lowest priority first:
/// 1. **Base File**: TOML at `path` (defaults to [`DEFAULT_CONFIG_FILE`]). A missing file is
///    not an error: it is the first start and every field falls back to its default.
/// 2. **Environment Overrides**: variables prefixed with `GLINT__`, nested keys separated
///    by double underscores (e.g. `GLINT__SHOW_DEBUG_CODES=true`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is malformed or a value does not fit the
/// target type `T`.
///
/// # Example
/// ```rust,no_run
/// use glint_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     enabled_codes: u64,
/// }
///
/// let cfg: Settings = load_config(Some("config/codes.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(&effective_path(path), true)
}

/// Loads only the file layer, ignoring `GLINT__` overrides.
///
/// This is what a store has to write back: overrides are transient and must not leak into
/// the file.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is malformed or a value does not fit the
/// target type `T`.
pub fn load_file_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(&effective_path(path), false)
}

fn effective_path(path: Option<impl AsRef<Path>>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf())
}

fn load<T>(path: &Path, with_env: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml).required(false));
    if with_env {
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        );
    }

    info!(env = with_env, "Loading config from {}", path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
