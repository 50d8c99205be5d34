//! Session - the owner of a character's history.
//!
//! Wraps the history log, the character's current whereabouts and the
//! artifact names into one value that lives exactly as long as the
//! character does. Game systems call into it as milestones happen.

use crate::config::{ConfigError, HistoryConfig};
use crate::context::{ArtifactRegistry, SessionState};
use crate::dump::format_entries;
use crate::entry::{ArtifactId, HistoryEntry};
use crate::flags::{HistoryFlags, HistoryKind};
use crate::log::HistoryError;
use crate::recorder::{ArtifactUpdate, PlayerHistory};
use thiserror::Error;
use tracing::{info, warn};

/// Errors from Session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid history configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),
}

/// Configuration for creating a new session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Player character name.
    pub character_name: String,

    /// Sizing policy for the history log.
    pub history: HistoryConfig,

    /// Dungeon level the character starts on.
    pub starting_depth: u16,

    /// Character level at birth.
    pub starting_level: u16,
}

impl SessionConfig {
    /// Create a new session config with the character's name.
    pub fn new(character_name: impl Into<String>) -> Self {
        Self {
            character_name: character_name.into(),
            history: HistoryConfig::default(),
            starting_depth: 0,
            starting_level: 1,
        }
    }

    /// Set the history sizing policy.
    pub fn with_history(mut self, history: HistoryConfig) -> Self {
        self.history = history;
        self
    }

    /// Set the starting dungeon level.
    pub fn with_starting_depth(mut self, depth: u16) -> Self {
        self.starting_depth = depth;
        self
    }

    /// Set the starting character level.
    pub fn with_starting_level(mut self, level: u16) -> Self {
        self.starting_level = level;
        self
    }
}

/// One character's play session.
pub struct Session {
    character_name: String,
    state: SessionState,
    artifacts: ArtifactRegistry,
    history: PlayerHistory,
    finished: bool,
}

impl Session {
    /// Create a session with an empty history.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let history = PlayerHistory::with_config(config.history)?;
        Ok(Self {
            character_name: config.character_name,
            state: SessionState::new(config.starting_depth, config.starting_level),
            artifacts: ArtifactRegistry::new(),
            history,
            finished: false,
        })
    }

    /// Create a session and record the character's birth.
    pub fn start(config: SessionConfig) -> Result<Self, SessionError> {
        let mut session = Self::new(config)?;
        let text = format!("{} began the adventure", session.character_name);
        session.add_event_simple(&text, HistoryKind::PlayerBirth, None)?;
        info!(character = %session.character_name, "session started");
        Ok(session)
    }

    pub fn character_name(&self) -> &str {
        &self.character_name
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Mutable character state (depth, level, clock).
    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn artifacts(&self) -> &ArtifactRegistry {
        &self.artifacts
    }

    pub fn artifacts_mut(&mut self) -> &mut ArtifactRegistry {
        &mut self.artifacts
    }

    pub fn history(&self) -> &PlayerHistory {
        &self.history
    }

    // =========================================================================
    // Recording
    // =========================================================================

    /// Record an entry with explicit tags and context.
    pub fn add_event(
        &mut self,
        flags: HistoryFlags,
        artifact: Option<ArtifactId>,
        dungeon_level: u16,
        character_level: u16,
        turn: u32,
        text: &str,
    ) -> Result<(), HistoryError> {
        self.history
            .add_full(flags, artifact, dungeon_level, character_level, turn, text)
    }

    /// Record a single-tag entry stamped with the current state.
    pub fn add_event_simple(
        &mut self,
        text: &str,
        kind: HistoryKind,
        artifact: Option<ArtifactId>,
    ) -> Result<(), HistoryError> {
        self.history.add(&self.state, text, kind, artifact)
    }

    /// Log an artifact being found or missed, or reveal it.
    pub fn add_or_update_artifact(
        &mut self,
        artifact: ArtifactId,
        known: bool,
        found: bool,
    ) -> Result<ArtifactUpdate, HistoryError> {
        self.history
            .add_artifact(&self.state, &self.artifacts, artifact, known, found)
    }

    /// Mark an artifact as lost. See [`PlayerHistory::lose_artifact`].
    pub fn lose_artifact(&mut self, artifact: ArtifactId) -> Result<bool, HistoryError> {
        self.history
            .lose_artifact(&self.state, &self.artifacts, artifact)
    }

    pub fn is_artifact_known(&self, artifact: ArtifactId) -> bool {
        self.history.is_artifact_known(artifact)
    }

    /// Raise the character level and note it in the history.
    pub fn gain_level(&mut self, level: u16) -> Result<(), HistoryError> {
        self.state.set_level(level);
        let text = format!("Reached level {level}");
        self.add_event_simple(&text, HistoryKind::GainLevel, None)
    }

    // =========================================================================
    // End of session
    // =========================================================================

    pub fn unmask_unknown(&mut self) {
        self.history.unmask_unknown();
    }

    /// Close the session: record the death, reveal every artifact and
    /// return the final history table.
    ///
    /// A full log still produces a dump; only the death line is dropped.
    /// Later calls return the same dump without recording another death.
    pub fn finish(&mut self, cause: &str) -> String {
        if !self.finished {
            let text = format!("Killed by {cause}");
            if let Err(err) = self.add_event_simple(&text, HistoryKind::PlayerDeath, None) {
                warn!(error = %err, "death not recorded");
            }
            self.unmask_unknown();
            self.finished = true;
        }
        format_entries(self.history.entries())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn entry_count(&self) -> usize {
        self.history.len()
    }

    /// All entries, oldest first. Re-fetch after every recording call.
    pub fn get_entries(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Forget the history, e.g. when the character is restarted.
    pub fn clear_all(&mut self) {
        self.history.clear();
        self.finished = false;
    }

    /// True once [`Session::finish`] has run.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> ArtifactId {
        ArtifactId::new(raw).unwrap()
    }

    #[test]
    fn test_start_records_birth() {
        let session = Session::start(SessionConfig::new("Frodo")).unwrap();
        assert_eq!(session.entry_count(), 1);

        let birth = &session.get_entries()[0];
        assert_eq!(birth.flags(), HistoryFlags::PLAYER_BIRTH);
        assert_eq!(birth.text(), "Frodo began the adventure");
        assert_eq!(birth.character_level(), 1);
    }

    #[test]
    fn test_invalid_config() {
        let config = SessionConfig::new("Sam").with_history(HistoryConfig::new().with_birth_size(0));
        assert!(matches!(
            Session::new(config),
            Err(SessionError::Config(ConfigError::ZeroBirthSize))
        ));
    }

    #[test]
    fn test_records_current_state() {
        let mut session = Session::new(SessionConfig::new("Merry").with_starting_depth(2)).unwrap();
        session.state_mut().spend_energy(1_000);
        session.gain_level(2).unwrap();

        let entry = &session.get_entries()[0];
        assert_eq!(entry.flags(), HistoryFlags::GAIN_LEVEL);
        assert_eq!(entry.dungeon_level(), 2);
        assert_eq!(entry.character_level(), 2);
        assert_eq!(entry.turn(), 10);
        assert_eq!(entry.text(), "Reached level 2");
    }

    #[test]
    fn test_artifact_flow() {
        let mut session = Session::new(SessionConfig::new("Pippin")).unwrap();
        session.artifacts_mut().register(id(1), "the Palantir of Orthanc");

        let update = session.add_or_update_artifact(id(1), false, true).unwrap();
        assert_eq!(update, ArtifactUpdate::Recorded);
        assert!(!session.is_artifact_known(id(1)));

        assert!(session.lose_artifact(id(1)).unwrap());
        assert_eq!(session.entry_count(), 1);
        assert!(session.get_entries()[0].flags().is_lost());
    }

    #[test]
    fn test_finish_reveals_and_dumps() {
        let mut session = Session::start(SessionConfig::new("Bilbo")).unwrap();
        session.artifacts_mut().register(id(2), "the One Ring");
        session.state_mut().set_depth(10);
        session.add_or_update_artifact(id(2), false, true).unwrap();

        let dump = session.finish("Smaug");
        assert!(dump.contains("Found the One Ring"));
        assert!(dump.contains("Killed by Smaug"));
        assert!(session.is_artifact_known(id(2)));
        assert!(session.get_entries().iter().all(|e| !e.flags().is_unknown()));
    }

    #[test]
    fn test_finish_twice_records_one_death() {
        let mut session = Session::start(SessionConfig::new("Boromir")).unwrap();
        let first = session.finish("orc arrows");
        assert!(session.is_finished());
        let count = session.entry_count();

        let second = session.finish("orc arrows");
        assert_eq!(first, second);
        assert_eq!(session.entry_count(), count);
        let deaths = session
            .get_entries()
            .iter()
            .filter(|e| e.flags() == HistoryFlags::PLAYER_DEATH)
            .count();
        assert_eq!(deaths, 1);
    }

    #[test]
    fn test_clear_all() {
        let mut session = Session::start(SessionConfig::new("Sam")).unwrap();
        session.clear_all();
        assert_eq!(session.entry_count(), 0);
        assert_eq!(session.history().capacity(), 0);
    }
}
