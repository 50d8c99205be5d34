//! Recording milestones into the player's history.

use crate::config::{ConfigError, HistoryConfig};
use crate::context::{ArtifactNamer, SessionContext};
use crate::entry::{ArtifactId, HistoryEntry};
use crate::flags::{HistoryFlags, HistoryKind};
use crate::log::{EventLog, HistoryError};
use tracing::debug;

/// What [`PlayerHistory::add_artifact`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactUpdate {
    /// A new entry was appended.
    Recorded,
    /// An existing entry was rewritten as known.
    Revealed,
    /// The artifact already has an active entry; nothing changed.
    AlreadyLogged,
}

impl ArtifactUpdate {
    /// True unless the call was a no-op.
    pub fn changed(&self) -> bool {
        !matches!(self, ArtifactUpdate::AlreadyLogged)
    }
}

/// The history of one character.
///
/// Owned by the game session: created empty at birth, cleared or dropped
/// when the session ends.
#[derive(Debug, Clone, Default)]
pub struct PlayerHistory {
    log: EventLog,
}

impl PlayerHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HistoryConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            log: EventLog::with_config(config)?,
        })
    }

    /// The underlying log.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    // =========================================================================
    // Recording
    // =========================================================================

    /// Record an entry with an explicit tag set and context.
    pub fn add_full(
        &mut self,
        flags: HistoryFlags,
        artifact: Option<ArtifactId>,
        dungeon_level: u16,
        character_level: u16,
        turn: u32,
        text: &str,
    ) -> Result<(), HistoryError> {
        let entry = HistoryEntry::new(
            flags,
            artifact,
            dungeon_level,
            character_level,
            turn,
            text,
            self.log.config().max_text_len,
        );
        self.log.append(entry)
    }

    /// Record an entry with a single tag, stamped with the current context.
    pub fn add(
        &mut self,
        ctx: &impl SessionContext,
        text: &str,
        kind: HistoryKind,
        artifact: Option<ArtifactId>,
    ) -> Result<(), HistoryError> {
        self.add_with_flags(ctx, text, kind.flag(), artifact)
    }

    fn add_with_flags(
        &mut self,
        ctx: &impl SessionContext,
        text: &str,
        flags: HistoryFlags,
        artifact: Option<ArtifactId>,
    ) -> Result<(), HistoryError> {
        self.add_full(
            flags,
            artifact,
            ctx.depth(),
            ctx.character_level(),
            ctx.turn(),
            text,
        )
    }

    // =========================================================================
    // Artifacts
    // =========================================================================

    /// Log that an artifact was found or missed, or reveal an existing entry.
    ///
    /// A known artifact with an active entry has that entry rewritten as
    /// known; otherwise a new known entry is recorded. An unknown artifact
    /// gets a new entry (also tagged lost if it was missed) unless it is
    /// already active, in which case nothing changes.
    pub fn add_artifact(
        &mut self,
        ctx: &impl SessionContext,
        namer: &impl ArtifactNamer,
        artifact: ArtifactId,
        known: bool,
        found: bool,
    ) -> Result<ArtifactUpdate, HistoryError> {
        let name = namer.artifact_name(artifact);
        let text = if found {
            format!("Found {name}")
        } else {
            format!("Missed {name}")
        };
        let active = self.log.is_active(artifact);

        if known {
            if active {
                self.log.mark_known(artifact);
                return Ok(ArtifactUpdate::Revealed);
            }
            self.add(ctx, &text, HistoryKind::ArtifactKnown, Some(artifact))?;
        } else {
            if active {
                debug!(%artifact, "artifact already logged");
                return Ok(ArtifactUpdate::AlreadyLogged);
            }
            let mut flags = HistoryFlags::ARTIFACT_UNKNOWN;
            if !found {
                flags |= HistoryFlags::ARTIFACT_LOST;
            }
            self.add_with_flags(ctx, &text, flags, Some(artifact))?;
        }

        debug!(%artifact, known, found, "artifact recorded");
        Ok(ArtifactUpdate::Recorded)
    }

    /// Mark an artifact as lost for good.
    ///
    /// This covers both leaving it behind on a level and a store purging it
    /// after it was sold. Returns `true` if an existing entry was tagged;
    /// `false` means the artifact had never been logged and a "Missed" entry
    /// was recorded for it instead.
    pub fn lose_artifact(
        &mut self,
        ctx: &impl SessionContext,
        namer: &impl ArtifactNamer,
        artifact: ArtifactId,
    ) -> Result<bool, HistoryError> {
        if self.log.mark_lost(artifact) {
            return Ok(true);
        }
        self.add_artifact(ctx, namer, artifact, false, false)?;
        Ok(false)
    }

    /// True if the artifact is known in the history.
    pub fn is_artifact_known(&self, artifact: ArtifactId) -> bool {
        self.log.is_known(artifact)
    }

    /// Reveal all unknown artifacts for the final dump.
    pub fn unmask_unknown(&mut self) {
        self.log.unmask_unknown();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.log.capacity()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        self.log.entries()
    }

    /// Forget the whole history.
    pub fn clear(&mut self) {
        self.log.clear();
    }
}
