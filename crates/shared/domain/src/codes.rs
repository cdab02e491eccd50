use bitflags::Flags;
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// A set of fun-mode codes, one bit per code.
    ///
    /// Bit `0x002000` belonged to a retired code and is never assigned.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CodeFlag: u64 {
        const CLOWN         = 0x00_0001;
        const EMPEROR       = 0x00_0002;
        const INDIVIDUAL    = 0x00_0004;
        const DWARF         = 0x00_0008;
        const GIANT         = 0x00_0010;
        const OOPS_HYUR     = 0x00_0020;
        const OOPS_ELEZEN   = 0x00_0040;
        const OOPS_LALAFELL = 0x00_0080;
        const OOPS_MIQOTE   = 0x00_0100;
        const OOPS_ROEGADYN = 0x00_0200;
        const OOPS_AU_RA    = 0x00_0400;
        const OOPS_HROTHGAR = 0x00_0800;
        const OOPS_VIERA    = 0x00_1000;
        const SIXTY_THREE   = 0x00_4000;
        const SHIRTS        = 0x00_8000;
        const WORLD         = 0x01_0000;
        const ELEPHANTS     = 0x02_0000;
        const CROWN         = 0x04_0000;
        const DOLPHINS      = 0x08_0000;
        const FACE          = 0x10_0000;
        const MANDERVILLE   = 0x20_0000;
        const SMILES        = 0x40_0000;
    }
}

// Groups live outside the macro so they never show up as named flags.
impl CodeFlag {
    /// Codes that recolour gear.
    pub const DYE_CODES: Self =
        Self::CLOWN.union(Self::WORLD).union(Self::ELEPHANTS).union(Self::DOLPHINS);

    /// Codes that replace gear.
    pub const GEAR_CODES: Self =
        Self::EMPEROR.union(Self::WORLD).union(Self::ELEPHANTS).union(Self::DOLPHINS);

    /// Codes that force every player into one race.
    pub const RACE_CODES: Self = Self::OOPS_HYUR
        .union(Self::OOPS_ELEZEN)
        .union(Self::OOPS_LALAFELL)
        .union(Self::OOPS_MIQOTE)
        .union(Self::OOPS_ROEGADYN)
        .union(Self::OOPS_AU_RA)
        .union(Self::OOPS_HROTHGAR)
        .union(Self::OOPS_VIERA);

    /// Codes that override the whole appearance.
    pub const FULL_CODES: Self = Self::FACE.union(Self::MANDERVILLE).union(Self::SMILES);

    /// Codes that change heights.
    pub const SIZE_CODES: Self = Self::DWARF.union(Self::GIANT);

    /// Codes hidden from the toggle panel unless debug codes are requested.
    pub const DEBUG_CODES: Self = Self::FULL_CODES;

    const EVERYTHING: Self = Self::FULL_CODES
        .union(Self::RACE_CODES)
        .union(Self::SIZE_CODES)
        .union(Self::GEAR_CODES)
        .union(Self::DYE_CODES)
        .union(Self::CROWN)
        .union(Self::SIXTY_THREE);
}

struct CodeInfo {
    flag: CodeFlag,
    groups: CodeFlag,
    name: &'static str,
    description: &'static str,
}

const DEBUG_DESCRIPTION: &str = "Enable a debugging mode for the UI. Not really useful.";

/// Every code with the groups it collides with, its display name and description.
///
/// A row's conflict set is `groups` minus the code itself.
static CODE_TABLE: [CodeInfo; 22] = [
    CodeInfo {
        flag: CodeFlag::CLOWN,
        groups: CodeFlag::FULL_CODES.union(CodeFlag::DYE_CODES),
        name: "Random Dyes",
        description: "Randomizes dyes for every player.",
    },
    CodeInfo {
        flag: CodeFlag::EMPEROR,
        groups: CodeFlag::FULL_CODES.union(CodeFlag::GEAR_CODES),
        name: "Random Clothing",
        description: "Randomizes clothing for every player.",
    },
    CodeInfo {
        flag: CodeFlag::INDIVIDUAL,
        groups: CodeFlag::FULL_CODES,
        name: "Random Customizations",
        description: "Randomizes customizations for every player.",
    },
    CodeInfo {
        flag: CodeFlag::DWARF,
        groups: CodeFlag::FULL_CODES.union(CodeFlag::SIZE_CODES),
        name: "Player Dwarf Mode",
        description: "Sets the player character to minimum height and all other players to maximum height.",
    },
    CodeInfo {
        flag: CodeFlag::GIANT,
        groups: CodeFlag::FULL_CODES.union(CodeFlag::SIZE_CODES),
        name: "Player Giant Mode",
        description: "Sets the player character to maximum height and all other players to minimum height.",
    },
    race_row(CodeFlag::OOPS_HYUR, "All Hyur", "Turns all players to Hyur."),
    race_row(CodeFlag::OOPS_ELEZEN, "All Elezen", "Turns all players to Elezen."),
    race_row(CodeFlag::OOPS_LALAFELL, "All Lalafell", "Turns all players to Lalafell."),
    race_row(CodeFlag::OOPS_MIQOTE, "All Miqo'te", "Turns all players to Miqo'te."),
    race_row(CodeFlag::OOPS_ROEGADYN, "All Roegadyn", "Turns all players to Roegadyn."),
    race_row(CodeFlag::OOPS_AU_RA, "All Au Ra", "Turns all players to Au Ra."),
    race_row(CodeFlag::OOPS_HROTHGAR, "All Hrothgar", "Turns all players to Hrothgar."),
    race_row(CodeFlag::OOPS_VIERA, "All Viera", "Turns all players to Viera."),
    CodeInfo {
        flag: CodeFlag::SIXTY_THREE,
        groups: CodeFlag::FULL_CODES,
        name: "Invert Genders",
        description: "Inverts the gender of every player.",
    },
    CodeInfo {
        flag: CodeFlag::SHIRTS,
        groups: CodeFlag::empty(),
        name: "Show All Items Unlocked",
        description: "Highlights all items in the Unlocks tab as if they were unlocked.",
    },
    CodeInfo {
        flag: CodeFlag::WORLD,
        groups: CodeFlag::FULL_CODES.union(CodeFlag::DYE_CODES).union(CodeFlag::GEAR_CODES),
        name: "Job-Appropriate Gear",
        description: "Sets every player except the player character themselves to job-appropriate gear.",
    },
    CodeInfo {
        flag: CodeFlag::ELEPHANTS,
        groups: CodeFlag::FULL_CODES.union(CodeFlag::DYE_CODES).union(CodeFlag::GEAR_CODES),
        name: "Everyone Elephants",
        description: "Sets every player to the elephant costume in varying shades of pink.",
    },
    CodeInfo {
        flag: CodeFlag::CROWN,
        groups: CodeFlag::FULL_CODES,
        name: "Clown Mentors",
        description: "Sets every player with a mentor symbol enabled to the clown's hat.",
    },
    CodeInfo {
        flag: CodeFlag::DOLPHINS,
        groups: CodeFlag::FULL_CODES.union(CodeFlag::DYE_CODES).union(CodeFlag::GEAR_CODES),
        name: "Everyone Namazu",
        description: "Sets every player to a Namazu hat with different costume bodies.",
    },
    debug_row(CodeFlag::FACE, "Debug Mode (Face)"),
    debug_row(CodeFlag::MANDERVILLE, "Debug Mode (Manderville)"),
    debug_row(CodeFlag::SMILES, "Debug Mode (Smiles)"),
];

const fn race_row(flag: CodeFlag, name: &'static str, description: &'static str) -> CodeInfo {
    CodeInfo { flag, groups: CodeFlag::FULL_CODES.union(CodeFlag::RACE_CODES), name, description }
}

const fn debug_row(flag: CodeFlag, name: &'static str) -> CodeInfo {
    CodeInfo { flag, groups: CodeFlag::EVERYTHING, name, description: DEBUG_DESCRIPTION }
}

impl CodeFlag {
    fn info(self) -> Option<&'static CodeInfo> {
        CODE_TABLE.iter().find(|row| row.flag == self)
    }

    /// Returns the codes that must be cleared when `self` is enabled.
    ///
    /// Anything other than exactly one known code maps to the empty set.
    #[must_use]
    pub fn conflicts(self) -> Self {
        self.info().map_or_else(Self::empty, |row| row.groups.difference(row.flag))
    }

    /// Human-readable display name, `"Unknown"` for anything but a single code.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.info().map_or("Unknown", |row| row.name)
    }

    /// One-line description of what the code does, empty for anything but a single code.
    #[must_use]
    pub fn description(self) -> &'static str {
        self.info().map_or("", |row| row.description)
    }

    /// Constant name of a single code (`OOPS_AU_RA`).
    #[must_use]
    pub fn ident(self) -> Option<&'static str> {
        Self::FLAGS.iter().find(|flag| *flag.value() == self).map(|flag| flag.name())
    }

    /// Iterates every single code in bit order.
    pub fn codes() -> impl Iterator<Item = Self> {
        Self::FLAGS.iter().map(|flag| *flag.value())
    }

    /// Looks a code up by its constant name (`oops_au_ra`, `OOPS-AU-RA`) or its display
    /// name (`All Au Ra`). Matching ignores ASCII case.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        let wanted = name.trim();
        let normalized = wanted.replace('-', "_");
        Self::FLAGS
            .iter()
            .find(|flag| {
                flag.name().eq_ignore_ascii_case(&normalized)
                    || flag.value().name().eq_ignore_ascii_case(wanted)
            })
            .map(|flag| *flag.value())
    }
}

impl Default for CodeFlag {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for CodeFlag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de> Deserialize<'de> for CodeFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u64::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
