//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading, the persistence seam and the
//! traits standing in for the host's actor table live here, the domain types are
//! re-exported as [`domain`].
//!
//! ## Config loading
//! ```rust,no_run
//! use glint_kernel::config::load_config;
//! use glint_kernel::domain::config::Configuration;
//!
//! let cfg: Configuration = load_config(Some("codes.toml")).unwrap_or_default();
//! ```
//!
//! ## Shared configuration
//! ```rust
//! use glint_kernel::domain::codes::CodeFlag;
//! use glint_kernel::domain::config::Configuration;
//! use glint_kernel::store::{ConfigHandle, MemoryStore};
//!
//! let handle = ConfigHandle::new(Configuration::default(), MemoryStore::default());
//! handle.update(|cfg| cfg.enabled_codes |= CodeFlag::SHIRTS);
//! assert!(handle.read(|cfg| cfg.enabled_codes.contains(CodeFlag::SHIRTS)));
//! ```
pub mod actors;
pub mod config;
pub mod store;

pub use glint_domain as domain;
