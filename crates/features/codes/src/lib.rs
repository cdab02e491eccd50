//! Fun-mode codes feature slice.
//!
//! * [`CodeService`]: the toggle registry over the persisted set of enabled codes.
//! * [`CodePanel`]: the settings panel without the drawing, listing codes and forcing a
//!   redraw of every valid actor after a change.
//!
//! ```rust
//! use glint_codes::CodeService;
//! use glint_kernel::domain::codes::CodeFlag;
//! use glint_kernel::domain::config::Configuration;
//! use glint_kernel::store::{ConfigHandle, MemoryStore};
//!
//! let codes = CodeService::new(ConfigHandle::new(Configuration::default(), MemoryStore::default()));
//! codes.toggle(CodeFlag::DWARF, true);
//! codes.toggle(CodeFlag::GIANT, true);
//! assert_eq!(codes.all_enabled(), CodeFlag::GIANT);
//! ```
mod error;
mod panel;
mod service;

pub use crate::error::{CodesError, CodesErrorExt};
pub use crate::panel::{CodeEntry, CodePanel, TOOLTIP};
pub use crate::service::CodeService;
