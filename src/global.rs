//! Per-thread default store
//!
//! Binding glue that has nowhere to keep a [`SnapshotStore`] can use these
//! free functions instead. Each thread gets its own store, created lazily
//! on first use and kept for the thread's lifetime.

use std::cell::RefCell;

use tracing::warn;

use crate::map::{CursorMap, CursorState};
use crate::store::{Handle, SnapshotStore};

thread_local! {
    static DEFAULT_STORE: RefCell<SnapshotStore<CursorState>> = RefCell::new(SnapshotStore::new());
}

/// Run `f` with this thread's default store
///
/// Returns `None` after a diagnostic when called re-entrantly from inside
/// another `f`, since the store is already borrowed; `f` does not run then.
pub fn with_default_store<R>(f: impl FnOnce(&mut SnapshotStore<CursorState>) -> R) -> Option<R> {
    DEFAULT_STORE.with(|store| match store.try_borrow_mut() {
        Ok(mut store) => Some(f(&mut store)),
        Err(_) => {
            warn!(target: "cursor_keeper", "default snapshot store already in use on this thread");
            None
        }
    })
}

/// [`SnapshotStore::save`] on the default store
pub fn save<M>(map: Option<&mut M>) -> Handle
where
    M: CursorMap<Cursor = CursorState>,
{
    with_default_store(|store| store.save(map)).unwrap_or(Handle::INVALID)
}

/// [`SnapshotStore::restore`] on the default store
pub fn restore<M>(map: Option<&mut M>, handle: Handle)
where
    M: CursorMap<Cursor = CursorState>,
{
    let _ = with_default_store(|store| store.restore(map, handle));
}

/// [`safe_keys`](crate::safe_keys) on the default store
pub fn safe_keys<M>(map: Option<&mut M>) -> Vec<M::Key>
where
    M: CursorMap<Cursor = CursorState>,
{
    with_default_store(|store| crate::enumerate::safe_keys(store, map)).unwrap_or_default()
}

/// [`safe_values`](crate::safe_values) on the default store
pub fn safe_values<M>(map: Option<&mut M>) -> Vec<M::Value>
where
    M: CursorMap<Cursor = CursorState>,
{
    with_default_store(|store| crate::enumerate::safe_values(store, map)).unwrap_or_default()
}

/// [`safe_copy`](crate::safe_copy) on the default store
pub fn safe_copy<M>(map: Option<&mut M>) -> Vec<(M::Key, M::Value)>
where
    M: CursorMap<Cursor = CursorState>,
{
    with_default_store(|store| crate::enumerate::safe_copy(store, map)).unwrap_or_default()
}
