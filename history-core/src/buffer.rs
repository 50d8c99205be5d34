//! Growable backing storage for the history log.
//!
//! Capacity is tracked explicitly rather than left to `Vec`'s doubling
//! strategy: the first append allocates `birth_size` slots, every later
//! overflow adds `growth_step` more, and nothing is ever allocated past
//! `max_entries`. Growth may move every entry, so slices handed out by
//! [`EntryBuffer::as_slice`] never outlive the next push.

use crate::config::HistoryConfig;
use crate::entry::HistoryEntry;
use crate::log::HistoryError;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub(crate) struct EntryBuffer {
    entries: Vec<HistoryEntry>,
    capacity: usize,
    config: HistoryConfig,
}

impl EntryBuffer {
    /// An unallocated buffer; storage is created on the first push.
    pub(crate) fn new(config: HistoryConfig) -> Self {
        Self {
            entries: Vec::new(),
            capacity: 0,
            config,
        }
    }

    pub(crate) fn config(&self) -> &HistoryConfig {
        &self.config
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Make sure one more entry fits, growing if needed.
    pub(crate) fn ensure_room(&mut self) -> Result<(), HistoryError> {
        if self.capacity == 0 {
            self.resize(self.config.birth_size);
            return Ok(());
        }

        if self.entries.len() < self.capacity {
            return Ok(());
        }

        let target = (self.capacity + self.config.growth_step).min(self.config.max_entries);
        if target <= self.capacity {
            warn!(
                max = self.config.max_entries,
                "history log is full, dropping entry"
            );
            return Err(HistoryError::Full {
                max: self.config.max_entries,
            });
        }

        self.resize(target);
        Ok(())
    }

    fn resize(&mut self, target: usize) {
        debug!(from = self.capacity, to = target, "growing history log");
        self.entries.reserve_exact(target - self.entries.len());
        self.capacity = target;
    }

    /// Append one entry, growing first if the buffer is full.
    pub(crate) fn push(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.ensure_room()?;
        self.entries.push(entry);
        Ok(())
    }

    pub(crate) fn as_slice(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [HistoryEntry] {
        &mut self.entries
    }

    /// Drop all storage; the next push starts again from the birth size.
    pub(crate) fn release(&mut self) {
        self.entries = Vec::new();
        self.capacity = 0;
    }
}
