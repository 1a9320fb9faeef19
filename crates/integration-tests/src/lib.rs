//! Integration tests for the address book.
//!
//! Each test starts a real lookup server on an ephemeral port and talks to it
//! over HTTP, either with `reqwest` directly or through the client library.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p address-book-integration-tests
//! ```

use address_book_client::{ClientConfig, HttpLookupClient};
use address_book_server::state::AppState;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

/// A lookup server running in the background for the duration of a test.
///
/// The server task is aborted when the handle is dropped.
pub struct TestServer {
    url: Url,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by `state` on a free local port.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start(state: AppState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        let url = Url::parse(&format!("http://{addr}")).expect("Invalid test server URL");

        let handle = tokio::spawn(async move {
            axum::serve(listener, address_book_server::app(state))
                .await
                .expect("Test server error");
        });

        Self { url, handle }
    }

    /// Base URL of the server.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// URL of the lookup endpoint with the given raw query string.
    ///
    /// # Panics
    ///
    /// Panics if the resulting URL is invalid.
    #[must_use]
    pub fn lookup_url(&self, query: &str) -> Url {
        let mut url = self
            .url
            .join("api/getAddresses")
            .expect("Invalid lookup URL");
        url.set_query(Some(query));
        url
    }

    /// A lookup client pointed at this server.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client(&self) -> HttpLookupClient {
        HttpLookupClient::new(&ClientConfig::new(self.url.clone()))
            .expect("Failed to build lookup client")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
