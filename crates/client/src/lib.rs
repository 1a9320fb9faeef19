//! Address Book client library.
//!
//! # Modules
//!
//! - [`lookup`] - HTTP client for the lookup endpoint
//! - [`search`] - Search state machine driving lookups
//! - [`app`] - Application flow: form, search and address book together
//! - [`config`] - Client configuration from the environment

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod lookup;
pub mod search;

pub use app::{AddressBookApp, PersonError};
pub use config::ClientConfig;
pub use lookup::{ClientError, HttpLookupClient, LookupClient};
pub use search::{AddressSearch, SearchState, SearchStatus};
