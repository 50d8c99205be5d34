//! Artifact state tracking over the history log.
//!
//! An artifact's entries form a timeline: found, lost, found again. The most
//! recent entry is the authoritative one, so every lookup here walks the log
//! from the newest entry back and stops at the first match.

use crate::entry::ArtifactId;
use crate::flags::HistoryFlags;
use crate::log::EventLog;
use tracing::{debug, trace};

impl EventLog {
    /// Index of the newest entry for `artifact`, lost or not.
    fn latest_entry(&self, artifact: ArtifactId) -> Option<usize> {
        self.entries().iter().rposition(|e| e.concerns(artifact))
    }

    /// Mark the newest entry for `artifact` as known.
    ///
    /// All other tags on that entry are cleared, so calling this twice
    /// leaves the entry exactly as the first call did. Returns `false` if the
    /// artifact has never been logged.
    pub fn mark_known(&mut self, artifact: ArtifactId) -> bool {
        let Some(index) = self.latest_entry(artifact) else {
            trace!(%artifact, "no entry to mark known");
            return false;
        };
        *self.entries_mut()[index].flags_mut() = HistoryFlags::ARTIFACT_KNOWN;
        debug!(%artifact, index, "artifact marked known");
        true
    }

    /// Tag the newest entry for `artifact` as lost, keeping its other tags.
    ///
    /// Returns `false` if the artifact has never been logged; the caller is
    /// then expected to record a "missed" entry instead.
    pub fn mark_lost(&mut self, artifact: ArtifactId) -> bool {
        let Some(index) = self.latest_entry(artifact) else {
            trace!(%artifact, "no entry to mark lost");
            return false;
        };
        self.entries_mut()[index]
            .flags_mut()
            .insert(HistoryFlags::ARTIFACT_LOST);
        debug!(%artifact, index, "artifact marked lost");
        true
    }

    /// True if any entry for `artifact` is tagged known.
    pub fn is_known(&self, artifact: ArtifactId) -> bool {
        self.entries()
            .iter()
            .rev()
            .any(|e| e.flags().is_known() && e.concerns(artifact))
    }

    /// True if `artifact` has an entry that is not tagged lost.
    ///
    /// Lost entries are skipped so that an artifact found again after being
    /// lost gets a fresh entry instead of reviving the old one.
    pub(crate) fn is_active(&self, artifact: ArtifactId) -> bool {
        self.entries()
            .iter()
            .rev()
            .filter(|e| !e.flags().is_lost())
            .any(|e| e.concerns(artifact))
    }

    /// Reveal every hidden artifact entry.
    ///
    /// Meant for the final character dump after death or retirement.
    /// Running it again changes nothing.
    pub fn unmask_unknown(&mut self) {
        let mut revealed = 0usize;
        for entry in self.entries_mut().iter_mut().rev() {
            let flags = entry.flags_mut();
            if flags.is_unknown() {
                flags.remove(HistoryFlags::ARTIFACT_UNKNOWN);
                flags.insert(HistoryFlags::ARTIFACT_KNOWN);
                revealed += 1;
            }
        }
        debug!(revealed, "unmasked unknown artifacts");
    }
}
