//! Player history log with artifact lifecycle tracking.
//!
//! This crate provides:
//! - A bounded, linearly growing log of a character's milestones
//! - Artifact state tracking (unknown, known, lost, found again)
//! - An end-of-game pass that reveals every hidden artifact
//! - Character sheet / death dump rendering
//!
//! # Quick Start
//!
//! ```
//! use history_core::{ArtifactId, Session, SessionConfig};
//!
//! let mut session = Session::start(SessionConfig::new("Frodo")).unwrap();
//! let phial = ArtifactId::new(1).unwrap();
//! session.artifacts_mut().register(phial, "the Phial of Galadriel");
//!
//! session.state_mut().set_depth(5);
//! session.add_or_update_artifact(phial, false, true).unwrap();
//! assert!(!session.is_artifact_known(phial));
//!
//! let dump = session.finish("a cave troll");
//! assert!(dump.contains("Found the Phial of Galadriel"));
//! ```

pub mod artifact;
mod buffer;
pub mod config;
pub mod context;
pub mod dump;
pub mod entry;
pub mod flags;
pub mod log;
pub mod recorder;
pub mod session;
pub mod testing;

// Primary public API
pub use config::{ConfigError, HistoryConfig, HISTORY_BIRTH_SIZE, HISTORY_MAX};
pub use context::{ArtifactNamer, ArtifactRegistry, SessionContext, SessionState};
pub use entry::{ArtifactId, HistoryEntry};
pub use flags::{HistoryFlags, HistoryKind};
pub use log::{EventLog, HistoryError};
pub use recorder::{ArtifactUpdate, PlayerHistory};
pub use session::{Session, SessionConfig, SessionError};
pub use testing::TestContext;
