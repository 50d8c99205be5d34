//! The ordered, append-only history log.

use crate::buffer::EntryBuffer;
use crate::config::{ConfigError, HistoryConfig};
use crate::entry::HistoryEntry;
use thiserror::Error;

/// Errors from history log operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history log is full ({max} entries)")]
    Full { max: usize },
}

/// Chronological list of history entries.
///
/// Insertion order is the only order. Entries never move relative to each
/// other and are never removed individually; the whole log is released with
/// [`EventLog::clear`].
#[derive(Debug, Clone)]
pub struct EventLog {
    buffer: EntryBuffer,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    /// Create an empty log with the default sizing policy.
    pub fn new() -> Self {
        Self {
            buffer: EntryBuffer::new(HistoryConfig::default()),
        }
    }

    /// Create an empty log with a custom sizing policy.
    pub fn with_config(config: HistoryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            buffer: EntryBuffer::new(config),
        })
    }

    pub fn config(&self) -> &HistoryConfig {
        self.buffer.config()
    }

    /// Append an entry at the end of the log.
    ///
    /// Text longer than the configured bound is truncated. Fails only when
    /// the log already holds its maximum number of entries, in which case it
    /// is left unchanged.
    pub fn append(&mut self, mut entry: HistoryEntry) -> Result<(), HistoryError> {
        entry.bound_text(self.config().max_text_len);
        self.buffer.push(entry)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Currently allocated slots.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Read-only view of every entry, oldest first.
    ///
    /// The borrow ends before the next append, clear or unmask, so a view
    /// can never observe a relocated buffer.
    pub fn entries(&self) -> &[HistoryEntry] {
        self.buffer.as_slice()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [HistoryEntry] {
        self.buffer.as_mut_slice()
    }

    /// Release all storage and forget every entry.
    pub fn clear(&mut self) {
        self.buffer.release();
    }
}
