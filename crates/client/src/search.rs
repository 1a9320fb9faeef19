//! Search state machine.
//!
//! ```text
//! Idle ──search──▶ Fetching ──ok──────▶ Success
//!                     │     ──error───▶ Error
//!                     │     ──fault───▶ Fault
//!                     ◀──────search──── (any state)
//! ```
//!
//! A search clears the previous results and error text before the request is
//! issued. There is no cancellation: when searches overlap, whichever response
//! settles last determines the final state.
//!
//! Transport faults are logged and settle in [`SearchStatus::Fault`]. They
//! never reach the error text, which only ever holds messages produced by
//! the lookup endpoint.

use address_book_core::{Address, LookupResponse};
use tokio::sync::RwLock;
use tracing::instrument;

use crate::lookup::LookupClient;

/// Lifecycle of the most recent search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Fetching,
    Success,
    Error,
    /// The request never produced an endpoint response.
    Fault,
}

/// Snapshot of the search state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    status: SearchStatus,
    addresses: Vec<Address>,
    error_message: String,
}

impl SearchState {
    #[must_use]
    pub const fn status(&self) -> SearchStatus {
        self.status
    }

    #[must_use]
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Error text from the endpoint, empty when there is none.
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.status == SearchStatus::Fetching
    }

    fn begin(&mut self) {
        self.addresses.clear();
        self.error_message.clear();
        self.status = SearchStatus::Fetching;
    }

    fn settle(&mut self, status: SearchStatus, addresses: Vec<Address>, error_message: String) {
        self.status = status;
        self.addresses = addresses;
        self.error_message = error_message;
    }
}

/// Drives lookups and exposes their status, results and error text.
#[derive(Debug)]
pub struct AddressSearch<C> {
    client: C,
    state: RwLock<SearchState>,
}

impl<C: LookupClient> AddressSearch<C> {
    /// Create an idle search backed by `client`.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: RwLock::new(SearchState::default()),
        }
    }

    /// Look up candidates and settle the state with the outcome.
    ///
    /// Every returned address has its `id` and `house_number` replaced with
    /// the submitted house number, so all candidates of one search share an
    /// id.
    #[instrument(skip(self))]
    pub async fn search(&self, postcode: &str, house_number: &str) {
        self.state.write().await.begin();

        let outcome = self.client.lookup(postcode, house_number).await;

        let mut state = self.state.write().await;
        match outcome {
            Ok(LookupResponse::Ok { details }) => {
                let addresses: Vec<Address> = details
                    .into_iter()
                    .map(|address| address.keyed_by_house_number(house_number))
                    .collect();
                tracing::debug!(candidates = addresses.len(), "Search succeeded");
                state.settle(SearchStatus::Success, addresses, String::new());
            }
            Ok(LookupResponse::Error { errormessage }) => {
                tracing::debug!(reason = %errormessage, "Search rejected");
                state.settle(SearchStatus::Error, Vec::new(), errormessage);
            }
            Err(err) => {
                tracing::error!(error = %err, "Address lookup failed");
                state.settle(SearchStatus::Fault, Vec::new(), String::new());
            }
        }
    }

    /// A copy of the current state.
    pub async fn state(&self) -> SearchState {
        self.state.read().await.clone()
    }

    /// Clear the error text, leaving status and results untouched.
    pub async fn clear_error(&self) {
        self.state.write().await.error_message.clear();
    }

    /// Clear the results, leaving status and error text untouched.
    pub async fn clear_addresses(&self) {
        self.state.write().await.addresses.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use address_book_core::NOT_FOUND_MESSAGE;
    use tokio::sync::{Mutex, oneshot};

    use super::*;
    use crate::lookup::ClientError;

    pub(crate) fn candidate(postcode: &str, street: &str) -> Address {
        Address {
            id: format!("{postcode}-{street}"),
            postcode: postcode.to_string(),
            house_number: "raw".to_string(),
            street: street.to_string(),
            city: "Utrecht".to_string(),
            lat: 52.09,
            long: 5.12,
        }
    }

    pub(crate) fn parse_fault() -> ClientError {
        ClientError::Parse(serde_json::from_str::<LookupResponse>("<html>").unwrap_err())
    }

    /// Answers every lookup immediately from a function.
    pub(crate) struct FnClient<F>(F);

    pub(crate) const fn fn_client<F>(answer: F) -> FnClient<F>
    where
        F: Fn(&str, &str) -> Result<LookupResponse, ClientError> + Sync,
    {
        FnClient(answer)
    }

    impl<F> LookupClient for FnClient<F>
    where
        F: Fn(&str, &str) -> Result<LookupResponse, ClientError> + Sync,
    {
        async fn lookup(&self, postcode: &str, house_number: &str) -> Result<LookupResponse, ClientError> {
            (self.0)(postcode, house_number)
        }
    }

    type Pending = oneshot::Receiver<Result<LookupResponse, ClientError>>;

    /// Answers each lookup when the test sends the response for its house number.
    struct ScriptedClient {
        pending: Mutex<HashMap<String, Pending>>,
    }

    impl ScriptedClient {
        fn new(pending: impl IntoIterator<Item = (&'static str, Pending)>) -> Self {
            Self {
                pending: Mutex::new(
                    pending
                        .into_iter()
                        .map(|(house_number, rx)| (house_number.to_string(), rx))
                        .collect(),
                ),
            }
        }
    }

    impl LookupClient for ScriptedClient {
        async fn lookup(&self, _postcode: &str, house_number: &str) -> Result<LookupResponse, ClientError> {
            let rx = self.pending.lock().await.remove(house_number).unwrap();
            rx.await.unwrap()
        }
    }

    async fn wait_until<C: LookupClient>(search: &AddressSearch<C>, done: impl Fn(&SearchState) -> bool) {
        while !done(&search.state().await) {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let search = AddressSearch::new(fn_client(|_, _| {
            Ok(LookupResponse::Ok { details: vec![] })
        }));
        let state = search.state().await;
        assert_eq!(state.status(), SearchStatus::Idle);
        assert!(state.addresses().is_empty());
        assert!(state.error_message().is_empty());
    }

    #[tokio::test]
    async fn test_success_keys_candidates_by_house_number() {
        let search = AddressSearch::new(fn_client(|postcode, _| {
            Ok(LookupResponse::Ok {
                details: vec![candidate(postcode, "Damrak"), candidate(postcode, "Rokin")],
            })
        }));

        search.search("1234", "5").await;

        let state = search.state().await;
        assert_eq!(state.status(), SearchStatus::Success);
        assert_eq!(state.addresses().len(), 2);
        for address in state.addresses() {
            assert_eq!(address.id, "5");
            assert_eq!(address.house_number, "5");
            assert_eq!(address.postcode, "1234");
        }
        assert!(state.error_message().is_empty());
    }

    #[tokio::test]
    async fn test_error_response_sets_message() {
        let search = AddressSearch::new(fn_client(|_, _| {
            Ok(LookupResponse::error(NOT_FOUND_MESSAGE))
        }));

        search.search("1234", "0").await;

        let state = search.state().await;
        assert_eq!(state.status(), SearchStatus::Error);
        assert_eq!(state.error_message(), "No results found!");
        assert!(state.addresses().is_empty());
    }

    #[tokio::test]
    async fn test_transport_fault_is_silent() {
        let search = AddressSearch::new(fn_client(|_, _| Err(parse_fault())));

        search.search("1234", "5").await;

        let state = search.state().await;
        assert_eq!(state.status(), SearchStatus::Fault);
        assert!(!state.is_fetching());
        assert!(state.error_message().is_empty());
        assert!(state.addresses().is_empty());
    }

    #[tokio::test]
    async fn test_fetching_is_observable_and_clears_previous_results() {
        let (tx_first, rx_first) = oneshot::channel();
        let (tx_second, rx_second) = oneshot::channel();
        let search = AddressSearch::new(ScriptedClient::new([("1", rx_first), ("2", rx_second)]));

        tx_first
            .send(Ok(LookupResponse::Ok {
                details: vec![candidate("1234", "Damrak")],
            }))
            .unwrap();
        search.search("1234", "1").await;
        assert_eq!(search.state().await.addresses().len(), 1);

        let observe = async {
            wait_until(&search, SearchState::is_fetching).await;
            let state = search.state().await;
            assert!(state.addresses().is_empty());
            assert!(state.error_message().is_empty());
            tx_second
                .send(Ok(LookupResponse::error(NOT_FOUND_MESSAGE)))
                .unwrap();
        };
        tokio::join!(search.search("1234", "2"), observe);

        assert_eq!(search.state().await.status(), SearchStatus::Error);
    }

    #[tokio::test]
    async fn test_overlapping_searches_last_to_settle_wins() {
        let (tx_first, rx_first) = oneshot::channel();
        let (tx_second, rx_second) = oneshot::channel();
        let search = AddressSearch::new(ScriptedClient::new([("1", rx_first), ("2", rx_second)]));

        let driver = async {
            // The second search settles first...
            tx_second
                .send(Ok(LookupResponse::Ok {
                    details: vec![candidate("1234", "Rokin")],
                }))
                .unwrap();
            wait_until(&search, |s| s.status() == SearchStatus::Success).await;
            assert_eq!(search.state().await.addresses()[0].id, "2");

            // ...then the first one overwrites it
            tx_first
                .send(Ok(LookupResponse::error(NOT_FOUND_MESSAGE)))
                .unwrap();
        };
        tokio::join!(search.search("1234", "1"), search.search("1234", "2"), driver);

        let state = search.state().await;
        assert_eq!(state.status(), SearchStatus::Error);
        assert_eq!(state.error_message(), NOT_FOUND_MESSAGE);
        assert!(state.addresses().is_empty());
    }

    #[tokio::test]
    async fn test_clear_error_and_clear_addresses_are_independent() {
        let search = AddressSearch::new(fn_client(|postcode, _| {
            if postcode == "0000" {
                Ok(LookupResponse::error("Postcode must be all digits and non negative!"))
            } else {
                Ok(LookupResponse::Ok {
                    details: vec![candidate(postcode, "Damrak")],
                })
            }
        }));

        search.search("1234", "5").await;
        search.clear_addresses().await;
        let state = search.state().await;
        assert!(state.addresses().is_empty());
        assert_eq!(state.status(), SearchStatus::Success);

        search.search("0000", "5").await;
        search.clear_error().await;
        let state = search.state().await;
        assert!(state.error_message().is_empty());
        assert_eq!(state.status(), SearchStatus::Error);
    }
}
