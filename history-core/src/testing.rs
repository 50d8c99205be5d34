//! Testing utilities for the history log.
//!
//! `TestContext` stands in for both the character state and the artifact
//! registry, so scenarios can be scripted without a real game around them.

use crate::context::{ArtifactNamer, ArtifactRegistry, SessionContext};
use crate::entry::ArtifactId;

/// A fixed session context with its own artifact names.
#[derive(Debug, Clone, Default)]
pub struct TestContext {
    /// Dungeon depth reported to the log.
    pub depth: u16,
    /// Character level reported to the log.
    pub level: u16,
    /// Turn reported to the log.
    pub turn: u32,
    registry: ArtifactRegistry,
}

impl TestContext {
    /// A level 1 character in town on turn 0.
    pub fn new() -> Self {
        Self {
            depth: 0,
            level: 1,
            turn: 0,
            registry: ArtifactRegistry::new(),
        }
    }

    /// Set depth, level and turn.
    pub fn at(mut self, depth: u16, level: u16, turn: u32) -> Self {
        self.depth = depth;
        self.level = level;
        self.turn = turn;
        self
    }

    /// Register an artifact name.
    ///
    /// # Panics
    ///
    /// Panics if `raw` is zero.
    pub fn with_artifact(mut self, raw: u32, name: &str) -> Self {
        let id = ArtifactId::new(raw).expect("artifact ids start at 1");
        self.registry.register(id, name);
        self
    }

    /// Advance the clock.
    pub fn advance(&mut self, turns: u32) {
        self.turn = self.turn.saturating_add(turns);
    }
}

impl SessionContext for TestContext {
    fn depth(&self) -> u16 {
        self.depth
    }

    fn character_level(&self) -> u16 {
        self.level
    }

    fn turn(&self) -> u32 {
        self.turn
    }
}

impl ArtifactNamer for TestContext {
    fn artifact_name(&self, artifact: ArtifactId) -> String {
        self.registry.artifact_name(artifact)
    }
}
