//! Cursor position and map identity

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Resume position of a [`CursorHash`](super::CursorHash) walk
///
/// Points at the next entry to examine: chain slot `entry` of bucket
/// `bucket`. A position past the end of a bucket simply moves on to the
/// next bucket, so a stale cursor never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorState {
    bucket: usize,
    entry: usize,
}

impl CursorState {
    /// Rewound cursor: the next step yields the first entry
    pub const START: CursorState = CursorState { bucket: 0, entry: 0 };

    pub(crate) fn new(bucket: usize, entry: usize) -> Self {
        Self { bucket, entry }
    }

    /// Bucket index the walk resumes from
    pub fn bucket(&self) -> usize {
        self.bucket
    }

    /// Chain slot within [`bucket`](Self::bucket) the walk resumes from
    pub fn entry(&self) -> usize {
        self.entry
    }

    /// True if the cursor points at the first position
    ///
    /// Removing the only yielded entry during a walk also lands here.
    pub fn is_start(&self) -> bool {
        *self == Self::START
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::START
    }
}

static NEXT_MAP_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a map instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapId(u64);

impl MapId {
    /// Allocate a fresh identity
    pub fn next() -> Self {
        MapId(NEXT_MAP_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw identity value
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
