//! Core types for the address book.

pub mod address;
pub mod entry;
pub mod lookup;

pub use address::Address;
pub use entry::{AddressBookEntry, EntryId};
pub use lookup::{LookupResponse, NOT_FOUND_MESSAGE};
