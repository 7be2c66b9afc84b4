//! Cursor-bearing associative structures
//!
//! A [`CursorMap`] embeds one enumeration cursor per instance. The cursor can
//! only be read destructively: [`CursorMap::take_cursor`] hands it out and
//! leaves the map rewound. Native enumeration ([`CursorMap::keys`],
//! [`CursorMap::values`]) rewinds it too.

mod cursor;
mod cursor_hash;

pub use cursor::{CursorState, MapId};
pub use cursor_hash::CursorHash;

/// Associative structure with a single embedded, destructively-read cursor
pub trait CursorMap {
    /// Key type
    type Key: Clone;
    /// Value type
    type Value: Clone;
    /// Saved form of the embedded cursor
    type Cursor: Clone;

    /// Identity of this instance
    fn map_id(&self) -> MapId;

    /// Number of entries
    fn len(&self) -> usize;

    /// True if the map holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a value; never touches the cursor
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Native "list all keys". Rewinds the cursor.
    fn keys(&mut self) -> Vec<Self::Key>;

    /// Native "list all values". Rewinds the cursor.
    fn values(&mut self) -> Vec<Self::Value>;

    /// Advance the cursor by one entry
    ///
    /// Returns `None` once every entry has been yielded and rewinds, so the
    /// following call starts a fresh walk.
    fn next_entry(&mut self) -> Option<(Self::Key, Self::Value)>;

    /// Destructive cursor read: return the live cursor and rewind it
    fn take_cursor(&mut self) -> Self::Cursor;

    /// Overwrite the live cursor
    fn restore_cursor(&mut self, cursor: Self::Cursor);
}
