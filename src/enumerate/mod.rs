//! Cursor-preserving enumeration
//!
//! Every operation here is a composition over the snapshot store: save the
//! cursor, run the native (rewinding) enumeration, restore the cursor. A
//! cursor walk paused around any of these calls resumes where it stopped.
//!
//! Values are fetched key by key through [`CursorMap::get`] rather than the
//! native [`CursorMap::values`], which would rewind the cursor a second time.

mod guard;

pub use guard::CursorGuard;

use crate::map::CursorMap;
use crate::store::SnapshotStore;

/// Run `f` against `map` with its cursor saved beforehand and restored after
///
/// `map` may be `None`; the store reports that and `f` still runs.
pub fn preserve_cursor<M, R, F>(
    store: &mut SnapshotStore<M::Cursor>,
    mut map: Option<&mut M>,
    f: F,
) -> R
where
    M: CursorMap,
    F: FnOnce(Option<&mut M>) -> R,
{
    let handle = store.save(map.as_deref_mut());
    let out = f(map.as_deref_mut());
    store.restore(map, handle);
    out
}

/// All keys in native enumeration order, leaving the cursor untouched
pub fn safe_keys<M: CursorMap>(
    store: &mut SnapshotStore<M::Cursor>,
    map: Option<&mut M>,
) -> Vec<M::Key> {
    preserve_cursor(store, map, |map| map.map(|m| m.keys()).unwrap_or_default())
}

/// Values in the same order as [`safe_keys`]
pub fn safe_values<M: CursorMap>(
    store: &mut SnapshotStore<M::Cursor>,
    mut map: Option<&mut M>,
) -> Vec<M::Value> {
    let keys = safe_keys(store, map.as_deref_mut());
    let Some(m) = map else {
        return Vec::new();
    };
    let values: Vec<_> = keys.iter().filter_map(|k| m.get(k).cloned()).collect();
    debug_assert_eq!(values.len(), keys.len(), "listed key has no value");
    values
}

/// Shallow copy of every entry in the same order as [`safe_keys`]
pub fn safe_copy<M: CursorMap>(
    store: &mut SnapshotStore<M::Cursor>,
    mut map: Option<&mut M>,
) -> Vec<(M::Key, M::Value)> {
    let keys = safe_keys(store, map.as_deref_mut());
    let Some(m) = map else {
        return Vec::new();
    };
    let expected = keys.len();
    let copy: Vec<_> = keys
        .into_iter()
        .filter_map(|k| {
            let v = m.get(&k).cloned()?;
            Some((k, v))
        })
        .collect();
    debug_assert_eq!(copy.len(), expected, "listed key has no value");
    copy
}

/// Method-call form of the safe operations
pub trait SafeEnumerate: CursorMap + Sized {
    /// See [`safe_keys`]
    fn safe_keys(&mut self, store: &mut SnapshotStore<Self::Cursor>) -> Vec<Self::Key> {
        safe_keys(store, Some(self))
    }

    /// See [`safe_values`]
    fn safe_values(&mut self, store: &mut SnapshotStore<Self::Cursor>) -> Vec<Self::Value> {
        safe_values(store, Some(self))
    }

    /// See [`safe_copy`]
    fn safe_copy(
        &mut self,
        store: &mut SnapshotStore<Self::Cursor>,
    ) -> Vec<(Self::Key, Self::Value)> {
        safe_copy(store, Some(self))
    }

    /// Save the cursor until the returned guard drops
    fn guard_cursor<'a>(&'a mut self, store: &'a mut SnapshotStore<Self::Cursor>) -> CursorGuard<'a, Self> {
        CursorGuard::new(store, self)
    }
}

impl<M: CursorMap> SafeEnumerate for M {}
