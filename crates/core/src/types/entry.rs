//! Address book entries and their composite identity.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Address;

/// Composite identity of an address book entry.
///
/// Formatted as `{address_id}-{first_name}-{last_name}`. Names containing
/// `-` can make two different triples render to the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Build the composite id from its three parts.
    #[must_use]
    pub fn compose(address_id: &str, first_name: &str, last_name: &str) -> Self {
        Self(format!("{address_id}-{first_name}-{last_name}"))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A finalized address with the person it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressBookEntry {
    #[serde(flatten)]
    pub address: Address,
    pub first_name: String,
    pub last_name: String,
}

impl AddressBookEntry {
    /// Attach a person's name to an address.
    #[must_use]
    pub fn new(address: Address, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            address,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The composite id used to address this entry.
    #[must_use]
    pub fn id(&self) -> EntryId {
        EntryId::compose(&self.address.id, &self.first_name, &self.last_name)
    }

    /// Whether both entries share the same (address id, first name, last name).
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.address.id == other.address.id
            && self.first_name == other.first_name
            && self.last_name == other.last_name
    }
}

impl fmt::Display for AddressBookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.first_name, self.last_name, self.address)
    }
}
