//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod control;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};

use powerctl_app::ports::{PowerControl, WakeSender};

use crate::auth::require_bearer;
use crate::error::ErrorBody;
use crate::state::AppState;

/// Build the control API routes.
///
/// Mutating routes sit behind the bearer check. Each route answers any other
/// method with the same `404` as an unknown path, and the bearer check only
/// runs for the registered method.
pub fn routes<P, W>(state: &AppState<P, W>) -> Router<AppState<P, W>>
where
    P: PowerControl + Send + Sync + 'static,
    W: WakeSender + Send + Sync + 'static,
{
    let auth = middleware::from_fn_with_state(Arc::clone(&state.api_key), require_bearer);

    Router::new()
        .route("/", get(control::root).fallback(not_found))
        .route("/health", get(control::health::<P, W>).fallback(not_found))
        .route(
            "/shutdown",
            post(control::shutdown::<P, W>)
                .route_layer(auth.clone())
                .fallback(not_found),
        )
        .route(
            "/cancel-shutdown",
            post(control::cancel_shutdown::<P, W>)
                .route_layer(auth.clone())
                .fallback(not_found),
        )
        .route(
            "/wake",
            post(control::wake::<P, W>)
                .route_layer(auth)
                .fallback(not_found),
        )
}

/// Answer for unmatched paths and methods.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(
            "Not found",
            "The requested endpoint does not exist".to_string(),
        )),
    )
}
