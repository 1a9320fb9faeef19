//! Request correlation ids.
//!
//! Every lookup gets an id that shows up in the trace span, the Sentry scope
//! and the `x-request-id` response header. Upstream proxies may supply one;
//! anything unusable is replaced by a fresh UUID v4.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream id accepted verbatim.
const MAX_UPSTREAM_LEN: usize = 128;

/// Correlation id of the current request, stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Pick the upstream id if it is short printable ASCII, otherwise mint one.
fn resolve(headers: &HeaderMap) -> RequestId {
    let upstream = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_UPSTREAM_LEN
                && id.bytes().all(|b| b.is_ascii_graphic())
        });
    RequestId(upstream.map_or_else(|| Uuid::new_v4().to_string(), String::from))
}

/// Middleware that tags every request with a [`RequestId`].
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let id = resolve(request.headers());

    Span::current().record("request_id", id.0.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &id.0));

    let header = HeaderValue::from_str(&id.0).ok();
    request.extensions_mut().insert(id);

    let mut response = next.run(request).await;
    if let Some(value) = header {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
