//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::provider::{AddressProvider, MockAddressProvider};

/// Delay applied before every successful lookup response.
///
/// Models network latency so clients can exercise their loading state.
pub const LOOKUP_RESPONSE_DELAY: Duration = Duration::from_millis(500);

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    provider: Box<dyn AddressProvider>,
}

impl AppState {
    /// Create application state backed by `provider`.
    #[must_use]
    pub fn new(provider: impl AddressProvider + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                provider: Box::new(provider),
            }),
        }
    }

    /// Get a reference to the address provider.
    #[must_use]
    pub fn provider(&self) -> &dyn AddressProvider {
        self.inner.provider.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MockAddressProvider::new())
    }
}
