//! Scope guard pairing a save with its restore

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::map::CursorMap;
use crate::store::{Handle, SnapshotStore};

/// Holds a map's cursor in the store until dropped
///
/// The map is reachable through `Deref`, so native enumeration can run
/// freely inside the guard's scope; dropping the guard puts the cursor back.
pub struct CursorGuard<'a, M: CursorMap> {
    store: &'a mut SnapshotStore<M::Cursor>,
    map: &'a mut M,
    handle: Handle,
}

impl<'a, M: CursorMap> CursorGuard<'a, M> {
    /// Save `map`'s cursor into `store`
    pub fn new(store: &'a mut SnapshotStore<M::Cursor>, map: &'a mut M) -> Self {
        let handle = store.save(Some(&mut *map));
        Self { store, map, handle }
    }

    /// Handle the cursor is parked under
    pub fn handle(&self) -> Handle {
        self.handle
    }
}

impl<M: CursorMap> Deref for CursorGuard<'_, M> {
    type Target = M;

    fn deref(&self) -> &M {
        &*self.map
    }
}

impl<M: CursorMap> DerefMut for CursorGuard<'_, M> {
    fn deref_mut(&mut self) -> &mut M {
        &mut *self.map
    }
}

impl<M: CursorMap> Drop for CursorGuard<'_, M> {
    fn drop(&mut self) {
        self.store.restore(Some(&mut *self.map), self.handle);
    }
}

impl<M: CursorMap> fmt::Debug for CursorGuard<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorGuard")
            .field("handle", &self.handle)
            .field("map", &self.map.map_id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::CursorHash;
    use crate::SafeEnumerate;

    #[test]
    fn test_guard_restores_on_drop() {
        let mut store = SnapshotStore::new();
        let mut map: CursorHash<u32, u32> = (0..20).map(|i| (i, i * i)).collect();
        map.next_entry();
        map.next_entry();
        let before = map.cursor();

        {
            let mut guard = map.guard_cursor(&mut store);
            assert!(guard.handle().is_valid());
            assert!(guard.cursor().is_start());
            assert_eq!(guard.keys().len(), 20);
            while guard.next_entry().is_some() {}
        }

        assert_eq!(map.cursor(), before);
        assert_eq!(store.outstanding(), 0);
    }

    #[test]
    fn test_nested_guards_take_distinct_handles() {
        let mut store = SnapshotStore::new();
        let mut outer: CursorHash<u32, u32> = (0..5).map(|i| (i, i)).collect();
        let mut inner: CursorHash<u32, u32> = (5..9).map(|i| (i, i)).collect();
        outer.next_entry();
        inner.next_entry();
        let (outer_at, inner_at) = (outer.cursor(), inner.cursor());

        let h_outer = store.save(Some(&mut outer));
        {
            let guard = CursorGuard::new(&mut store, &mut inner);
            assert_ne!(guard.handle(), h_outer);
        }
        store.restore(Some(&mut outer), h_outer);

        assert_eq!(outer.cursor(), outer_at);
        assert_eq!(inner.cursor(), inner_at);
    }
}
