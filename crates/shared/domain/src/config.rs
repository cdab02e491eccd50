use crate::codes::CodeFlag;
use serde::{Deserialize, Serialize};

/// Current layout version of [`Configuration`].
pub const CONFIG_VERSION: u32 = 1;

/// Process-wide persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub version: u32,
    /// Currently enabled fun-mode codes, stored as a single unsigned integer.
    pub enabled_codes: CodeFlag,
    /// Whether the toggle panel also lists the debug codes.
    pub show_debug_codes: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self { version: CONFIG_VERSION, enabled_codes: CodeFlag::empty(), show_debug_codes: false }
    }
}
