//! What the history log needs from the rest of the game.
//!
//! The log snapshots the character's whereabouts whenever it records an
//! entry, and asks for an artifact's display name when it writes a "Found"
//! or "Missed" line. Both are supplied through the traits below.

use crate::entry::ArtifactId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Game energy units per history turn.
pub const ENERGY_PER_TURN: u64 = 100;

/// Current dungeon depth, character level and game clock.
pub trait SessionContext {
    fn depth(&self) -> u16;
    fn character_level(&self) -> u16;
    fn turn(&self) -> u32;
}

/// Produces the display name of an artifact for log messages.
pub trait ArtifactNamer {
    fn artifact_name(&self, artifact: ArtifactId) -> String;
}

/// Minimal character state for driving a history log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current dungeon level, 0 for town.
    pub depth: u16,
    /// Current character level.
    pub level: u16,
    /// Energy spent since birth.
    pub total_energy: u64,
}

impl SessionState {
    pub fn new(depth: u16, level: u16) -> Self {
        Self {
            depth,
            level,
            total_energy: 0,
        }
    }

    /// Spend energy, advancing the game clock.
    pub fn spend_energy(&mut self, energy: u64) {
        self.total_energy = self.total_energy.saturating_add(energy);
    }

    pub fn set_depth(&mut self, depth: u16) {
        self.depth = depth;
    }

    pub fn set_level(&mut self, level: u16) {
        self.level = level;
    }
}

impl SessionContext for SessionState {
    fn depth(&self) -> u16 {
        self.depth
    }

    fn character_level(&self) -> u16 {
        self.level
    }

    fn turn(&self) -> u32 {
        u32::try_from(self.total_energy / ENERGY_PER_TURN).unwrap_or(u32::MAX)
    }
}

/// Artifact names by id.
#[derive(Debug, Clone, Default)]
pub struct ArtifactRegistry {
    names: HashMap<ArtifactId, String>,
}

impl ArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or rename an artifact.
    pub fn register(&mut self, artifact: ArtifactId, name: impl Into<String>) {
        self.names.insert(artifact, name.into());
    }

    pub fn name(&self, artifact: ArtifactId) -> Option<&str> {
        self.names.get(&artifact).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl ArtifactNamer for ArtifactRegistry {
    fn artifact_name(&self, artifact: ArtifactId) -> String {
        match self.name(artifact) {
            Some(name) => name.to_string(),
            None => format!("artifact {artifact}"),
        }
    }
}
