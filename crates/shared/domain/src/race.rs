use crate::codes::CodeFlag;
use serde::{Deserialize, Serialize};

/// Playable races a race code can force onto every player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    #[default]
    Unknown,
    Hyur,
    Elezen,
    Lalafell,
    Miqote,
    Roegadyn,
    AuRa,
    Hrothgar,
    Viera,
}

impl Race {
    /// Resolves the race forced by the race codes in `codes`.
    ///
    /// Yields [`Race::Unknown`] unless exactly one race code is present.
    #[must_use]
    pub fn from_codes(codes: CodeFlag) -> Self {
        let race = codes.intersection(CodeFlag::RACE_CODES);
        if race == CodeFlag::OOPS_HYUR {
            Self::Hyur
        } else if race == CodeFlag::OOPS_ELEZEN {
            Self::Elezen
        } else if race == CodeFlag::OOPS_LALAFELL {
            Self::Lalafell
        } else if race == CodeFlag::OOPS_MIQOTE {
            Self::Miqote
        } else if race == CodeFlag::OOPS_ROEGADYN {
            Self::Roegadyn
        } else if race == CodeFlag::OOPS_AU_RA {
            Self::AuRa
        } else if race == CodeFlag::OOPS_HROTHGAR {
            Self::Hrothgar
        } else if race == CodeFlag::OOPS_VIERA {
            Self::Viera
        } else {
            Self::Unknown
        }
    }
}
