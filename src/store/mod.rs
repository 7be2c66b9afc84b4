//! Saved-cursor slot table
//!
//! Each save takes a map's cursor (rewinding it) and parks the value in a
//! slot; the slot index is the [`Handle`]. Restoring writes the cursor back
//! and frees the slot. Per slot:
//!
//! ```text
//! Empty --save--> Occupied --restore--> Empty
//! Empty --restore--> Empty   (diagnostic only)
//! ```
//!
//! Free slots are handed out lowest index first. When none is left the
//! table doubles and the save lands on the first new slot. The table never
//! shrinks and existing handles never move.

mod config;
mod handle;
mod stats;

pub use config::{StoreConfig, DEFAULT_INITIAL_CAPACITY};
pub use handle::Handle;
pub use stats::StoreStats;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace, warn};

use crate::map::{CursorMap, MapId};
use crate::CursorError;

/// One occupied slot
#[derive(Debug)]
struct Snapshot<C> {
    cursor: C,
    owner: MapId,
}

/// Table of saved cursors addressed by [`Handle`]
///
/// Not synchronized; share it only within one thread of control.
#[derive(Debug)]
pub struct SnapshotStore<C> {
    config: StoreConfig,
    slots: Vec<Option<Snapshot<C>>>,

    /// Empty slot indices, smallest on top
    free: BinaryHeap<Reverse<usize>>,

    saves: u64,
    restores: u64,
    grow_events: u64,
    diagnostics: u64,
}

impl<C> SnapshotStore<C> {
    /// Create a store with the default configuration
    ///
    /// No slots are allocated until the first operation.
    pub fn new() -> Self {
        Self::build(StoreConfig::default())
    }

    /// Create a store with an explicit configuration
    pub fn with_config(config: StoreConfig) -> Result<Self, CursorError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: StoreConfig) -> Self {
        Self {
            config,
            slots: Vec::new(),
            free: BinaryHeap::new(),
            saves: 0,
            restores: 0,
            grow_events: 0,
            diagnostics: 0,
        }
    }

    /// Allocate the initial slots; no-op once done
    pub fn initialize(&mut self) {
        if !self.slots.is_empty() {
            return;
        }
        let capacity = self.config.initial_capacity;
        self.slots.resize_with(capacity, || None);
        self.free.extend((0..capacity).map(Reverse));
        debug!(target: "cursor_keeper", capacity, "snapshot table initialized");
    }

    /// Double the slot table
    ///
    /// Existing slots keep their index and contents. Returns the index of
    /// the first new slot (the old capacity).
    pub fn grow(&mut self) -> usize {
        self.initialize();
        let old = self.slots.len();
        let new = old * 2;
        self.slots.resize_with(new, || None);
        self.free.extend((old..new).map(Reverse));
        self.grow_events += 1;
        debug!(target: "cursor_keeper", from = old, to = new, "snapshot table grown");
        old
    }

    /// Save `map`'s cursor, rewinding it
    ///
    /// Fails with [`CursorError::InvalidReference`] when `map` is `None`;
    /// nothing is allocated in that case.
    pub fn try_save<M>(&mut self, map: Option<&mut M>) -> Result<Handle, CursorError>
    where
        M: CursorMap<Cursor = C>,
    {
        self.initialize();
        let Some(map) = map else {
            return Err(self.report(CursorError::InvalidReference));
        };

        let snapshot = Snapshot {
            owner: map.map_id(),
            cursor: map.take_cursor(),
        };
        let index = self.take_free_slot();
        self.slots[index] = Some(snapshot);
        self.saves += 1;

        let handle = Handle::from_index(index);
        trace!(target: "cursor_keeper", %handle, map = %map.map_id(), "cursor saved");
        Ok(handle)
    }

    /// Save `map`'s cursor; returns [`Handle::INVALID`] after a diagnostic on failure
    pub fn save<M>(&mut self, map: Option<&mut M>) -> Handle
    where
        M: CursorMap<Cursor = C>,
    {
        self.try_save(map).unwrap_or(Handle::INVALID)
    }

    /// Write the cursor saved under `handle` back into `map`
    ///
    /// The slot is empty afterwards whatever the outcome, except when the
    /// handle is out of range, in which case nothing changes.
    pub fn try_restore<M>(&mut self, map: Option<&mut M>, handle: Handle) -> Result<(), CursorError>
    where
        M: CursorMap<Cursor = C>,
    {
        self.initialize();
        let capacity = self.slots.len();
        let index = match handle.index() {
            Some(index) if index < capacity => index,
            _ => {
                return Err(self.report(CursorError::HandleOutOfRange {
                    handle: handle.raw(),
                    capacity,
                }))
            }
        };

        let Some(snapshot) = self.slots[index].take() else {
            return Err(self.report(CursorError::EmptySlot {
                handle: handle.raw(),
            }));
        };
        self.free.push(Reverse(index));

        let Some(map) = map else {
            return Err(self.report(CursorError::InvalidReference));
        };
        if self.config.verify_owner && snapshot.owner != map.map_id() {
            return Err(self.report(CursorError::OwnerMismatch {
                handle: handle.raw(),
                expected: snapshot.owner,
                found: map.map_id(),
            }));
        }

        map.restore_cursor(snapshot.cursor);
        self.restores += 1;
        trace!(target: "cursor_keeper", %handle, map = %map.map_id(), "cursor restored");
        Ok(())
    }

    /// Restore the cursor saved under `handle`; misuse is only logged
    pub fn restore<M>(&mut self, map: Option<&mut M>, handle: Handle)
    where
        M: CursorMap<Cursor = C>,
    {
        let _ = self.try_restore(map, handle);
    }

    /// Allocated slots (zero before first use)
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots currently holding a saved cursor
    pub fn outstanding(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// True if `handle` names an occupied slot
    pub fn is_occupied(&self, handle: Handle) -> bool {
        handle
            .index()
            .and_then(|index| self.slots.get(index))
            .is_some_and(Option::is_some)
    }

    /// Active configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            capacity: self.capacity(),
            outstanding: self.outstanding(),
            saves: self.saves,
            restores: self.restores,
            grow_events: self.grow_events,
            diagnostics: self.diagnostics,
        }
    }

    fn take_free_slot(&mut self) -> usize {
        if let Some(Reverse(index)) = self.free.pop() {
            return index;
        }
        let first = self.grow();
        self.free.retain(|&Reverse(index)| index != first);
        first
    }

    fn report(&mut self, err: CursorError) -> CursorError {
        self.diagnostics += 1;
        warn!(target: "cursor_keeper", error = %err, "cursor snapshot misuse");
        err
    }
}
