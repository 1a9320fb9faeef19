//! Address lookup handler.

use address_book_core::{LookupResponse, validate_lookup};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::{AppState, LOOKUP_RESPONSE_DELAY};

/// Lookup query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct LookupParams {
    pub postcode: Option<String>,
    pub streetnumber: Option<String>,
}

/// Look up candidate addresses for a postcode and house number.
///
/// Validation failures return 400 and an empty result returns 404, both
/// immediately. Successful responses are held back by
/// [`LOOKUP_RESPONSE_DELAY`]. Malformed query strings are treated as missing
/// fields.
#[instrument(skip(state, params))]
pub async fn get_addresses(
    State(state): State<AppState>,
    params: std::result::Result<Query<LookupParams>, QueryRejection>,
) -> Result<Json<LookupResponse>> {
    let params = params.map(|Query(p)| p).unwrap_or_default();

    let query = validate_lookup(params.postcode.as_deref(), params.streetnumber.as_deref())
        .inspect_err(|reason| tracing::debug!(%reason, "Rejected lookup"))?;

    let details = state.provider().lookup(query.postcode, query.house_number)?;
    if details.is_empty() {
        tracing::debug!(postcode = query.postcode, "No candidates");
        return Err(AppError::NotFound);
    }

    tokio::time::sleep(LOOKUP_RESPONSE_DELAY).await;

    tracing::info!(
        postcode = query.postcode,
        candidates = details.len(),
        "Lookup succeeded"
    );
    Ok(Json(LookupResponse::Ok { details }))
}
