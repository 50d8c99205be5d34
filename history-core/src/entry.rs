//! History entries and artifact identifiers.

use crate::flags::HistoryFlags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Stable identifier of an artifact definition.
///
/// Zero is reserved for "not artifact-related", so it cannot be represented
/// here; entries that concern no artifact carry `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtifactId(NonZeroU32);

impl ArtifactId {
    /// Wrap a raw registry index. Returns `None` for zero.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One milestone in the character's history.
///
/// Position, artifact, turn and text are fixed once the entry is in the log.
/// Only the tag set is rewritten later, and only by the log itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    flags: HistoryFlags,
    dungeon_level: u16,
    character_level: u16,
    turn: u32,
    artifact: Option<ArtifactId>,
    text: String,
}

impl HistoryEntry {
    /// Build an entry, truncating `text` to at most `max_text_len` bytes.
    pub fn new(
        flags: HistoryFlags,
        artifact: Option<ArtifactId>,
        dungeon_level: u16,
        character_level: u16,
        turn: u32,
        text: &str,
        max_text_len: usize,
    ) -> Self {
        Self {
            flags,
            dungeon_level,
            character_level,
            turn,
            artifact,
            text: truncate_text(text, max_text_len).to_string(),
        }
    }

    pub fn flags(&self) -> HistoryFlags {
        self.flags
    }

    /// Cut the text down to `max_len` bytes if it is longer.
    pub(crate) fn bound_text(&mut self, max_len: usize) {
        let len = truncate_text(&self.text, max_len).len();
        self.text.truncate(len);
    }

    pub(crate) fn flags_mut(&mut self) -> &mut HistoryFlags {
        &mut self.flags
    }

    pub fn dungeon_level(&self) -> u16 {
        self.dungeon_level
    }

    pub fn character_level(&self) -> u16 {
        self.character_level
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn artifact(&self) -> Option<ArtifactId> {
        self.artifact
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check whether this entry is about the given artifact.
    pub fn concerns(&self, artifact: ArtifactId) -> bool {
        self.artifact == Some(artifact)
    }
}

/// Cut `text` to at most `max_len` bytes without splitting a character.
pub fn truncate_text(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_id_rejects_zero() {
        assert!(ArtifactId::new(0).is_none());
        assert_eq!(ArtifactId::new(7).map(|id| id.get()), Some(7));
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_text("Found a sword", 80), "Found a sword");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "x".repeat(200);
        assert_eq!(truncate_text(&long, 80).len(), 80);
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        // 'é' is two bytes; a cut at byte 2 would split it
        let text = "aéb";
        assert_eq!(truncate_text(text, 2), "a");
        assert_eq!(truncate_text(text, 3), "aé");
    }

    #[test]
    fn test_entry_creation() {
        let id = ArtifactId::new(3).unwrap();
        let entry = HistoryEntry::new(
            HistoryFlags::ARTIFACT_UNKNOWN,
            Some(id),
            5,
            12,
            1500,
            "Found the Phial of Galadriel",
            80,
        );

        assert!(entry.concerns(id));
        assert!(!entry.concerns(ArtifactId::new(4).unwrap()));
        assert_eq!(entry.dungeon_level(), 5);
        assert_eq!(entry.character_level(), 12);
        assert_eq!(entry.turn(), 1500);
        assert!(entry.flags().is_unknown());
    }

    #[test]
    fn test_bound_text_keeps_char_boundary() {
        let mut entry = HistoryEntry::new(HistoryFlags::GENERIC, None, 0, 1, 0, "aéb", 80);
        entry.bound_text(2);
        assert_eq!(entry.text(), "a");
    }

    #[test]
    fn test_entry_text_is_bounded() {
        let entry = HistoryEntry::new(HistoryFlags::GENERIC, None, 0, 1, 0, &"a".repeat(100), 10);
        assert_eq!(entry.text(), "aaaaaaaaaa");
        assert!(entry.artifact().is_none());
    }
}
