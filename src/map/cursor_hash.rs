//! Chained hash table with one embedded enumeration cursor
//!
//! Entries live in a power-of-two bucket array; each bucket is a chain kept
//! in insertion order. Enumeration order is bucket order, then chain order,
//! and is the same for [`CursorMap::keys`] and a full cursor walk.

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::{CursorMap, CursorState, MapId};

const MIN_BUCKETS: usize = 8;

/// Hash map carrying a single shared cursor
///
/// The cursor is advanced by [`CursorMap::next_entry`] and rewound by every
/// native enumeration, so nested enumeration inside a cursor walk has to go
/// through [`safe_keys`](crate::safe_keys) and friends.
pub struct CursorHash<K, V, S = RandomState> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    cursor: CursorState,
    hasher: S,
    id: MapId,
}

impl<K, V> CursorHash<K, V, RandomState> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Create an empty map sized for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> CursorHash<K, V, S> {
    /// Create an empty map using `hasher`
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Create an empty map sized for `capacity` entries using `hasher`
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        let buckets = capacity.max(MIN_BUCKETS).next_power_of_two();
        Self {
            buckets: (0..buckets).map(|_| Vec::new()).collect(),
            len: 0,
            cursor: CursorState::START,
            hasher,
            id: MapId::next(),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Current cursor position (read without rewinding)
    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    /// Drop every entry and rewind the cursor
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
        self.cursor = CursorState::START;
    }

    fn entries(&self) -> impl Iterator<Item = &(K, V)> {
        self.buckets.iter().flatten()
    }
}

impl<K, V, S> CursorHash<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn bucket_of(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) as usize) & (self.buckets.len() - 1)
    }

    fn locate(&self, key: &K) -> Option<(usize, usize)> {
        let bucket = self.bucket_of(key);
        self.buckets[bucket]
            .iter()
            .position(|(k, _)| k == key)
            .map(|slot| (bucket, slot))
    }

    /// Insert or replace; returns the previous value
    ///
    /// Replacing keeps the entry's position. A new entry that pushes the
    /// load factor over 1 doubles the bucket array and rewinds the cursor.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some((bucket, slot)) = self.locate(&key) {
            return Some(std::mem::replace(&mut self.buckets[bucket][slot].1, value));
        }
        let bucket = self.bucket_of(&key);
        self.buckets[bucket].push((key, value));
        self.len += 1;
        if self.len > self.buckets.len() {
            self.rehash(self.buckets.len() * 2);
        }
        None
    }

    /// Look up a value
    pub fn get(&self, key: &K) -> Option<&V> {
        self.locate(key)
            .map(|(bucket, slot)| &self.buckets[bucket][slot].1)
    }

    /// Look up a value mutably
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let (bucket, slot) = self.locate(key)?;
        Some(&mut self.buckets[bucket][slot].1)
    }

    /// True if `key` is present
    pub fn contains_key(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// Remove an entry, returning its value
    ///
    /// Removing the entry the cursor just yielded is safe: the walk
    /// continues with the entry that followed it.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let (bucket, slot) = self.locate(key)?;
        let (_, value) = self.buckets[bucket].remove(slot);
        self.len -= 1;
        if bucket == self.cursor.bucket() && slot < self.cursor.entry() {
            self.cursor = CursorState::new(bucket, self.cursor.entry() - 1);
        }
        Some(value)
    }

    fn rehash(&mut self, buckets: usize) {
        let old = std::mem::replace(
            &mut self.buckets,
            (0..buckets).map(|_| Vec::new()).collect(),
        );
        for (key, value) in old.into_iter().flatten() {
            let bucket = self.bucket_of(&key);
            self.buckets[bucket].push((key, value));
        }
        self.cursor = CursorState::START;
    }
}

impl<K, V, S> CursorMap for CursorHash<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;
    type Cursor = CursorState;

    fn map_id(&self) -> MapId {
        self.id
    }

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, key: &K) -> Option<&V> {
        CursorHash::get(self, key)
    }

    fn keys(&mut self) -> Vec<K> {
        self.cursor = CursorState::START;
        self.entries().map(|(k, _)| k.clone()).collect()
    }

    fn values(&mut self) -> Vec<V> {
        self.cursor = CursorState::START;
        self.entries().map(|(_, v)| v.clone()).collect()
    }

    fn next_entry(&mut self) -> Option<(K, V)> {
        while self.cursor.bucket() < self.buckets.len() {
            let (bucket, slot) = (self.cursor.bucket(), self.cursor.entry());
            if let Some((k, v)) = self.buckets[bucket].get(slot) {
                self.cursor = CursorState::new(bucket, slot + 1);
                return Some((k.clone(), v.clone()));
            }
            self.cursor = CursorState::new(bucket + 1, 0);
        }
        self.cursor = CursorState::START;
        None
    }

    fn take_cursor(&mut self) -> CursorState {
        std::mem::take(&mut self.cursor)
    }

    fn restore_cursor(&mut self, cursor: CursorState) {
        self.cursor = cursor;
    }
}

impl<K, V, S: Clone> Clone for CursorHash<K, V, S>
where
    K: Clone,
    V: Clone,
{
    /// Copies entries and cursor position; the copy gets its own identity
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            len: self.len,
            cursor: self.cursor,
            hasher: self.hasher.clone(),
            id: MapId::next(),
        }
    }
}

impl<K, V, S: Default> Default for CursorHash<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for CursorHash<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K, V, S> Extend<(K, V)> for CursorHash<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for CursorHash<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}
