//! Category tags for history entries.
//!
//! Every entry carries a small bit set of tags. Tags are independent in
//! storage; the artifact tags are kept consistent by the artifact tracker,
//! not by this type.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// The set of category tags carried by one history entry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct HistoryFlags: u16 {
        /// Character was born.
        const PLAYER_BIRTH = 1 << 0;
        /// An artifact was seen but its identity is still hidden.
        const ARTIFACT_UNKNOWN = 1 << 1;
        /// An artifact is fully known.
        const ARTIFACT_KNOWN = 1 << 2;
        /// An artifact left the player's reach for good (or until re-found).
        const ARTIFACT_LOST = 1 << 3;
        /// Character died.
        const PLAYER_DEATH = 1 << 4;
        /// A unique monster was slain.
        const SLAY_UNIQUE = 1 << 5;
        /// Note typed in by the player.
        const USER_INPUT = 1 << 6;
        /// Savefile was imported from an older version.
        const SAVEFILE_IMPORT = 1 << 7;
        /// Character gained a level.
        const GAIN_LEVEL = 1 << 8;
        /// Anything else.
        const GENERIC = 1 << 9;
    }
}

impl Default for HistoryFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl HistoryFlags {
    /// All tags that describe an artifact's state.
    pub const ARTIFACT_STATE: Self = Self::ARTIFACT_UNKNOWN
        .union(Self::ARTIFACT_KNOWN)
        .union(Self::ARTIFACT_LOST);

    /// True if the entry is marked lost.
    pub fn is_lost(&self) -> bool {
        self.contains(Self::ARTIFACT_LOST)
    }

    /// True if the entry is still hidden from the player.
    pub fn is_unknown(&self) -> bool {
        self.contains(Self::ARTIFACT_UNKNOWN)
    }

    /// True if the entry is fully known.
    pub fn is_known(&self) -> bool {
        self.contains(Self::ARTIFACT_KNOWN)
    }
}

/// A single category tag, used when recording an entry with exactly one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryKind {
    PlayerBirth,
    ArtifactUnknown,
    ArtifactKnown,
    ArtifactLost,
    PlayerDeath,
    SlayUnique,
    UserInput,
    SavefileImport,
    GainLevel,
    Generic,
}

impl HistoryKind {
    /// The bit this kind occupies in a [`HistoryFlags`] set.
    pub fn flag(&self) -> HistoryFlags {
        match self {
            HistoryKind::PlayerBirth => HistoryFlags::PLAYER_BIRTH,
            HistoryKind::ArtifactUnknown => HistoryFlags::ARTIFACT_UNKNOWN,
            HistoryKind::ArtifactKnown => HistoryFlags::ARTIFACT_KNOWN,
            HistoryKind::ArtifactLost => HistoryFlags::ARTIFACT_LOST,
            HistoryKind::PlayerDeath => HistoryFlags::PLAYER_DEATH,
            HistoryKind::SlayUnique => HistoryFlags::SLAY_UNIQUE,
            HistoryKind::UserInput => HistoryFlags::USER_INPUT,
            HistoryKind::SavefileImport => HistoryFlags::SAVEFILE_IMPORT,
            HistoryKind::GainLevel => HistoryFlags::GAIN_LEVEL,
            HistoryKind::Generic => HistoryFlags::GENERIC,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HistoryKind::PlayerBirth => "Player Birth",
            HistoryKind::ArtifactUnknown => "Artifact (Unknown)",
            HistoryKind::ArtifactKnown => "Artifact (Known)",
            HistoryKind::ArtifactLost => "Artifact (Lost)",
            HistoryKind::PlayerDeath => "Player Death",
            HistoryKind::SlayUnique => "Slay Unique",
            HistoryKind::UserInput => "User Input",
            HistoryKind::SavefileImport => "Savefile Import",
            HistoryKind::GainLevel => "Gain Level",
            HistoryKind::Generic => "Generic",
        }
    }

    pub fn all() -> [HistoryKind; 10] {
        [
            HistoryKind::PlayerBirth,
            HistoryKind::ArtifactUnknown,
            HistoryKind::ArtifactKnown,
            HistoryKind::ArtifactLost,
            HistoryKind::PlayerDeath,
            HistoryKind::SlayUnique,
            HistoryKind::UserInput,
            HistoryKind::SavefileImport,
            HistoryKind::GainLevel,
            HistoryKind::Generic,
        ]
    }
}

impl From<HistoryKind> for HistoryFlags {
    fn from(kind: HistoryKind) -> Self {
        kind.flag()
    }
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_map_to_distinct_bits() {
        let mut seen = HistoryFlags::empty();
        for kind in HistoryKind::all() {
            let flag = kind.flag();
            assert_eq!(flag.bits().count_ones(), 1, "{kind} should be one bit");
            assert!(!seen.intersects(flag), "{kind} overlaps another kind");
            seen |= flag;
        }
        assert_eq!(seen, HistoryFlags::all());
    }

    #[test]
    fn test_artifact_state_mask() {
        let flags = HistoryFlags::ARTIFACT_UNKNOWN | HistoryFlags::ARTIFACT_LOST;
        assert!(flags.is_unknown());
        assert!(flags.is_lost());
        assert!(!flags.is_known());
        assert!(HistoryFlags::ARTIFACT_STATE.contains(flags));
        assert!(!HistoryFlags::ARTIFACT_STATE.contains(HistoryFlags::GAIN_LEVEL));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(HistoryFlags::default().is_empty());
    }
}
