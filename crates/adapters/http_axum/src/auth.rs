//! Bearer-token middleware for mutating routes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use powerctl_app::auth::ApiKey;

use crate::error::ApiError;

/// Reject the request with `401` unless it carries the configured bearer
/// token. The inner handler is never reached on rejection.
///
/// # Errors
///
/// Returns an unauthorized [`ApiError`] when verification fails.
pub async fn require_bearer(
    State(api_key): State<Arc<ApiKey>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if let Err(err) = api_key.verify(header) {
        tracing::warn!(
            method = %request.method(),
            path = request.uri().path(),
            "rejected request without valid bearer token"
        );
        return Err(err.into());
    }

    Ok(next.run(request).await)
}
