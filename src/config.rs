/// Configuration for the history buffer.
use serde::{Deserialize, Serialize};

/// Maximum number of already-applied entries kept in the past region
/// before the oldest are evicted.
const DEFAULT_MAX_SIZE: usize = 100;

/// Capacity configuration for an [`UndoRedoManager`].
///
/// `max_size` bounds the past (undoable) region only. Entries sitting in the
/// future region are never evicted by the capacity check; they disappear only
/// when a new entry is recorded over them.
///
/// [`UndoRedoManager`]: crate::manager::UndoRedoManager
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Max entries in the past region. Must be at least 1.
    pub max_size: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl HistoryConfig {
    /// Returns a copy with out-of-range fields clamped to usable values.
    ///
    /// A `max_size` of zero would make every recorded entry vanish
    /// immediately, so it is raised to 1 instead of rejected.
    pub fn sanitized(&self) -> Self {
        Self {
            max_size: self.max_size.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HistoryConfig::default();
        assert_eq!(config.max_size, 100);
    }

    #[test]
    fn test_sanitize_clamps_zero_max_size() {
        let config = HistoryConfig { max_size: 0 };
        assert_eq!(config.sanitized().max_size, 1);
    }

    #[test]
    fn test_sanitize_keeps_valid_max_size() {
        let config = HistoryConfig { max_size: 7 };
        assert_eq!(config.sanitized().max_size, 7);
    }
}
