//! Wire format of the lookup endpoint.

use serde::{Deserialize, Serialize};

use super::Address;

/// Message returned when the provider has no candidates.
pub const NOT_FOUND_MESSAGE: &str = "No results found!";

/// Body of every lookup response, tagged by `status`.
///
/// ```
/// use address_book_core::LookupResponse;
///
/// let body = r#"{"status":"error","errormessage":"No results found!"}"#;
/// let response: LookupResponse = serde_json::from_str(body).unwrap();
/// assert_eq!(response, LookupResponse::error("No results found!"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LookupResponse {
    /// Candidates were found.
    Ok { details: Vec<Address> },
    /// The request was rejected or nothing matched.
    Error { errormessage: String },
}

impl LookupResponse {
    /// Build an error body from any displayable reason.
    #[must_use]
    pub fn error(message: impl ToString) -> Self {
        Self::Error {
            errormessage: message.to_string(),
        }
    }
}
