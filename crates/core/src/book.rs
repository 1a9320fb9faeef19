//! The address book store.
//!
//! All mutation goes through [`AddressBook::add`], [`AddressBook::remove`] and
//! [`AddressBook::replace_all`]. `add` is the only path that enforces the
//! uniqueness of (address id, first name, last name).

use crate::types::{AddressBookEntry, EntryId};

/// Ordered collection of address book entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    entries: Vec<AddressBookEntry>,
}

impl AddressBook {
    /// Create an empty address book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry unless one with the same composite identity exists.
    ///
    /// Returns `true` if the entry was inserted. Duplicates are a silent no-op.
    pub fn add(&mut self, entry: AddressBookEntry) -> bool {
        if self.entries.iter().any(|existing| existing.same_identity(&entry)) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove every entry whose composite id equals `id`.
    ///
    /// Returns the number of entries removed.
    pub fn remove(&mut self, id: &EntryId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id() != *id);
        before - self.entries.len()
    }

    /// Replace the whole collection. No deduplication is applied.
    pub fn replace_all(&mut self, entries: Vec<AddressBookEntry>) {
        self.entries = entries;
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn select_all(&self) -> &[AddressBookEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
