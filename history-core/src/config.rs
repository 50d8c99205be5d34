//! Sizing policy for the history log.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Slots allocated by the first append.
pub const HISTORY_BIRTH_SIZE: usize = 10;

/// Slots added each time the log runs out of room.
pub const HISTORY_GROWTH_STEP: usize = 10;

/// Hard ceiling on the number of entries a log may ever hold.
pub const HISTORY_MAX: usize = 5000;

/// Longest entry text, in bytes.
pub const HISTORY_TEXT_LEN: usize = 80;

/// Errors from an invalid [`HistoryConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("birth size must be at least 1")]
    ZeroBirthSize,

    #[error("growth step must be at least 1")]
    ZeroGrowthStep,

    #[error("birth size {birth} exceeds the maximum of {max} entries")]
    BirthExceedsMax { birth: usize, max: usize },

    #[error("maximum of {max} entries exceeds the hard limit of {limit}")]
    MaxTooLarge { max: usize, limit: usize },

    #[error("entry text length must be at least 1 byte")]
    ZeroTextLen,
}

/// Capacity and text bounds for one history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Slots allocated on the first append after creation or clearing.
    pub birth_size: usize,

    /// Slots added when the log is full.
    pub growth_step: usize,

    /// Upper bound on entries; never above [`HISTORY_MAX`].
    pub max_entries: usize,

    /// Longer texts are truncated silently.
    pub max_text_len: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            birth_size: HISTORY_BIRTH_SIZE,
            growth_step: HISTORY_GROWTH_STEP,
            max_entries: HISTORY_MAX,
            max_text_len: HISTORY_TEXT_LEN,
        }
    }
}

impl HistoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_birth_size(mut self, size: usize) -> Self {
        self.birth_size = size;
        self
    }

    pub fn with_growth_step(mut self, step: usize) -> Self {
        self.growth_step = step;
        self
    }

    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }

    pub fn with_max_text_len(mut self, len: usize) -> Self {
        self.max_text_len = len;
        self
    }

    /// Check the policy is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.birth_size == 0 {
            return Err(ConfigError::ZeroBirthSize);
        }
        if self.growth_step == 0 {
            return Err(ConfigError::ZeroGrowthStep);
        }
        if self.max_entries > HISTORY_MAX {
            return Err(ConfigError::MaxTooLarge {
                max: self.max_entries,
                limit: HISTORY_MAX,
            });
        }
        if self.birth_size > self.max_entries {
            return Err(ConfigError::BirthExceedsMax {
                birth: self.birth_size,
                max: self.max_entries,
            });
        }
        if self.max_text_len == 0 {
            return Err(ConfigError::ZeroTextLen);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let config = HistoryConfig::default();
        assert_eq!(config.birth_size, 10);
        assert_eq!(config.growth_step, 10);
        assert_eq!(config.max_entries, 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = HistoryConfig::new().with_max_entries(25).with_birth_size(5);
        assert_eq!(config.max_entries, 25);
        assert_eq!(config.birth_size, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_policies() {
        assert_eq!(
            HistoryConfig::new().with_birth_size(0).validate(),
            Err(ConfigError::ZeroBirthSize)
        );
        assert_eq!(
            HistoryConfig::new().with_growth_step(0).validate(),
            Err(ConfigError::ZeroGrowthStep)
        );
        assert_eq!(
            HistoryConfig::new().with_max_entries(6000).validate(),
            Err(ConfigError::MaxTooLarge { max: 6000, limit: 5000 })
        );
        assert_eq!(
            HistoryConfig::new().with_max_entries(5).validate(),
            Err(ConfigError::BirthExceedsMax { birth: 10, max: 5 })
        );
        assert_eq!(
            HistoryConfig::new().with_max_text_len(0).validate(),
            Err(ConfigError::ZeroTextLen)
        );
    }
}
