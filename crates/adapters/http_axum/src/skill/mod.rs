//! Voice platform skill endpoint.

pub mod envelope;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use powerctl_app::ports::ControlClient;
use powerctl_app::services::voice_dispatcher::VoiceDispatcher;
use powerctl_domain::speech::Language;

use self::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::state::SkillState;

/// `POST /`
///
/// Always answers `200`. A body that is not a valid envelope gets the
/// apology.
pub async fn handle<C>(State(state): State<SkillState<C>>, body: Bytes) -> Json<ResponseEnvelope>
where
    C: ControlClient + Send + Sync + 'static,
{
    let envelope = match serde_json::from_slice::<RequestEnvelope>(&body) {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::warn!(error = %err, "malformed skill request");
            return Json(VoiceDispatcher::<C>::apologize(Language::default()).into());
        }
    };

    if let Some(request_id) = envelope.request.request_id.as_deref() {
        tracing::debug!(request_id, request_type = %envelope.request.kind, "skill request");
    }

    let (request, language) = envelope.into_voice_request();
    Json(state.dispatcher.dispatch(request, language).await.into())
}

/// `GET /health`
pub async fn health() -> &'static str {
    "OK"
}
