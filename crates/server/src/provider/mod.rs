//! Address providers.
//!
//! A provider turns a validated postcode and house number into candidate
//! addresses. From the endpoint's point of view it is deterministic and free
//! of side effects; an empty result means "not found".

mod mock;

pub use mock::MockAddressProvider;

use address_book_core::Address;
use thiserror::Error;

/// Errors raised by an address provider.
///
/// These are faults, not "not found": the endpoint does not retry them.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider's backing source is unavailable.
    #[error("address source unavailable: {0}")]
    Unavailable(String),
}

/// Source of candidate addresses.
pub trait AddressProvider: Send + Sync {
    /// Look up candidates for an already validated query.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the provider itself fails.
    fn lookup(&self, postcode: &str, house_number: &str) -> Result<Vec<Address>, ProviderError>;
}

impl<F> AddressProvider for F
where
    F: Fn(&str, &str) -> Result<Vec<Address>, ProviderError> + Send + Sync,
{
    fn lookup(&self, postcode: &str, house_number: &str) -> Result<Vec<Address>, ProviderError> {
        self(postcode, house_number)
    }
}
