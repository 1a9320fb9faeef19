//! One-shot address lookup.
//!
//! # Usage
//!
//! ```bash
//! ab-cli lookup 1234 5
//! ```

use address_book_client::{AddressSearch, LookupClient, SearchStatus};
use thiserror::Error;

/// Errors that can occur during a one-shot lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The server answered with an error message.
    #[error("{0}")]
    Rejected(String),

    /// The request failed before the server could answer.
    #[error("Lookup failed, is the server running?")]
    Unreachable,
}

/// Look up and print candidates.
///
/// # Errors
///
/// Returns `LookupError` when the lookup does not succeed.
pub async fn run(client: impl LookupClient, postcode: &str, house_number: &str) -> Result<(), LookupError> {
    let search = AddressSearch::new(client);
    search.search(postcode, house_number).await;
    let state = search.state().await;

    match state.status() {
        SearchStatus::Success => {
            #[allow(clippy::print_stdout)]
            for address in state.addresses() {
                println!("[{}] {address}", address.id);
            }
            Ok(())
        }
        SearchStatus::Error => Err(LookupError::Rejected(state.error_message().to_owned())),
        SearchStatus::Idle | SearchStatus::Fetching | SearchStatus::Fault => {
            Err(LookupError::Unreachable)
        }
    }
}
