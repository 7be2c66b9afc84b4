//! # Cursor-preserving enumeration for cursor-bearing hashes
//!
//! Some associative structures carry exactly one enumeration cursor per
//! instance, shared by every caller, and their "list all keys" primitive
//! rewinds that cursor. Listing keys from inside a cursor-driven loop then
//! restarts the loop: entries are repeated, skipped, or the loop never ends.
//!
//! This crate fixes that with a save/restore protocol:
//!
//! 1. **Snapshot store**: a growable table of saved cursors addressed by
//!    integer [`Handle`]s ([`SnapshotStore`])
//! 2. **Safe enumeration**: [`safe_keys`], [`safe_values`] and [`safe_copy`]
//!    save the cursor, run the native enumeration, then put the cursor back
//!
//! ## Usage Example
//!
//! ```
//! use cursor_keeper::{safe_keys, CursorHash, CursorMap, SnapshotStore};
//!
//! let mut map: CursorHash<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
//! let mut store = SnapshotStore::new();
//!
//! let first = map.next_entry();
//! let keys = safe_keys(&mut store, Some(&mut map));
//! assert_eq!(keys.len(), 3);
//!
//! // The walk resumes after `first` instead of starting over.
//! let second = map.next_entry();
//! assert_ne!(first, second);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod map;        // Cursor-bearing associative structure
pub mod store;      // Saved-cursor slot table
pub mod enumerate;  // Safe keys / values / copy
pub mod global;     // Per-thread default store for binding glue

// Re-exports for convenience
pub use map::{CursorHash, CursorMap, CursorState, MapId};
pub use store::{Handle, SnapshotStore, StoreConfig, StoreStats};
pub use enumerate::{preserve_cursor, safe_copy, safe_keys, safe_values, CursorGuard, SafeEnumerate};

use thiserror::Error;

/// Misuse conditions reported by the snapshot store
///
/// None of these are fatal: the diagnostic-only entry points
/// ([`SnapshotStore::save`], [`SnapshotStore::restore`]) log them and carry on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Structure reference was null or did not resolve
    #[error("invalid structure reference")]
    InvalidReference,

    /// Handle lies outside the current slot table
    #[error("handle {handle} out of range (capacity {capacity})")]
    HandleOutOfRange {
        /// Handle passed by the caller
        handle: i64,
        /// Slot table capacity at the time of the call
        capacity: usize,
    },

    /// Handle slot holds no saved cursor (double restore or failed save)
    #[error("handle {handle} holds no saved cursor")]
    EmptySlot {
        /// Handle passed by the caller
        handle: i64,
    },

    /// Cursor was saved from one map and restored into another
    #[error("handle {handle} was saved from map {expected} but restored into map {found}")]
    OwnerMismatch {
        /// Handle passed by the caller
        handle: i64,
        /// Map the cursor was saved from
        expected: MapId,
        /// Map the caller tried to restore into
        found: MapId,
    },

    /// Store configuration rejected
    #[error("invalid store configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_handle() {
        let err = CursorError::HandleOutOfRange { handle: 42, capacity: 10 };
        assert_eq!(err.to_string(), "handle 42 out of range (capacity 10)");

        let err = CursorError::EmptySlot { handle: -1 };
        assert_eq!(err.to_string(), "handle -1 holds no saved cursor");
    }
}
