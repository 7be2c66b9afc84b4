//! Snapshot store configuration

use crate::CursorError;

/// Slot count allocated by the first store operation
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Configuration parameters for a [`SnapshotStore`](super::SnapshotStore)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreConfig {
    /// Slots allocated on first use; doubled whenever the table is full
    pub initial_capacity: usize,

    /// Record each snapshot's source map and refuse to restore it elsewhere
    ///
    /// Off by default: the caller is trusted to pair handles with the map
    /// they were saved from.
    pub verify_owner: bool,
}

impl StoreConfig {
    /// Set the initial slot count
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Enable or disable owner checks on restore
    pub fn with_owner_check(mut self, enabled: bool) -> Self {
        self.verify_owner = enabled;
        self
    }

    /// Reject unusable settings
    pub fn validate(&self) -> Result<(), CursorError> {
        if self.initial_capacity == 0 {
            return Err(CursorError::InvalidConfiguration(
                "initial capacity must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            verify_owner: false,
        }
    }
}
