//! Integer handles naming saved cursors

use std::fmt;

/// Capability for restoring one saved cursor
///
/// Signed so the binding layer can pass it through as a plain integer;
/// negative values are the failure sentinel. Handles are single-use and
/// their values are recycled once restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(i64);

impl Handle {
    /// Failure sentinel returned by a save that could not proceed
    pub const INVALID: Handle = Handle(-1);

    pub(crate) fn from_index(index: usize) -> Self {
        Handle(index as i64)
    }

    /// Wrap a raw integer received from calling code
    pub fn from_raw(raw: i64) -> Self {
        Handle(raw)
    }

    /// Raw integer value
    pub fn raw(self) -> i64 {
        self.0
    }

    /// True unless this is a failure sentinel
    pub fn is_valid(self) -> bool {
        self.0 >= 0
    }

    /// Slot index, or `None` for a sentinel
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl From<Handle> for i64 {
    fn from(handle: Handle) -> i64 {
        handle.0
    }
}

impl From<i64> for Handle {
    fn from(raw: i64) -> Handle {
        Handle(raw)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
