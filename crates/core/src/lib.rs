//! Address Book Core - Shared types library.
//!
//! This crate provides the pieces shared by every address book component:
//! - `server` - Address lookup endpoint
//! - `client` - Lookup client, search state machine and application flow
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types, pure functions and in-memory state
//! containers - no I/O, no HTTP clients, no async runtime. This keeps it
//! lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Addresses, address book entries and the lookup wire format
//! - [`validation`] - Input gating applied before any lookup
//! - [`form`] - Fixed-schema form state with selective reset
//! - [`book`] - The deduplicating address book store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod book;
pub mod form;
pub mod types;
pub mod validation;

pub use book::AddressBook;
pub use form::{AddressField, AddressForm, FormError, FormSchema, FormState};
pub use types::*;
pub use validation::{LookupQuery, ValidationError, validate_lookup};
