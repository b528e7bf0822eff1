//! JSON REST handlers for host control.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::Serialize;
use serde_json::{Map, Value};

use powerctl_app::ports::{PowerControl, WakeSender};
use powerctl_domain::health::HealthReport;
use powerctl_domain::time::{self, Timestamp};
use powerctl_domain::wake::WakeTarget;

use crate::error::ApiError;
use crate::state::AppState;

/// Raw fields of a `POST /wake` body, validated later by [`WakeTarget::parse`].
#[derive(Debug, Default)]
pub struct WakeRequest {
    pub mac: Option<String>,
    pub broadcast: Option<String>,
}

/// Outcome reported in a [`ControlResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Online,
    Success,
}

/// Body of every successful control response.
///
/// `timestamp` is taken when the response is built, after the side effect.
#[derive(Debug, Serialize)]
pub struct ControlResponse {
    pub message: &'static str,
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    pub timestamp: Timestamp,
}

impl ControlResponse {
    fn success(message: &'static str) -> Self {
        Self {
            message,
            status: ResponseStatus::Success,
            mac: None,
            timestamp: time::now(),
        }
    }
}

/// `GET /`
pub async fn root() -> Json<ControlResponse> {
    Json(ControlResponse {
        message: "Computer Control Server is running",
        status: ResponseStatus::Online,
        mac: None,
        timestamp: time::now(),
    })
}

/// `GET /health`
pub async fn health<P, W>(State(state): State<AppState<P, W>>) -> Json<HealthReport>
where
    P: PowerControl + Send + Sync + 'static,
    W: WakeSender + Send + Sync + 'static,
{
    Json(state.control_service.health())
}

/// `POST /shutdown`
pub async fn shutdown<P, W>(
    State(state): State<AppState<P, W>>,
) -> Result<Json<ControlResponse>, ApiError>
where
    P: PowerControl + Send + Sync + 'static,
    W: WakeSender + Send + Sync + 'static,
{
    state.control_service.schedule_shutdown().await?;
    Ok(Json(ControlResponse::success("Computer will shutdown in 1 minute")))
}

/// `POST /cancel-shutdown`
pub async fn cancel_shutdown<P, W>(
    State(state): State<AppState<P, W>>,
) -> Result<Json<ControlResponse>, ApiError>
where
    P: PowerControl + Send + Sync + 'static,
    W: WakeSender + Send + Sync + 'static,
{
    state.control_service.cancel_shutdown().await?;
    Ok(Json(ControlResponse::success("Shutdown cancelled")))
}

/// `POST /wake`
///
/// A body that is empty or not a JSON object counts as a request without
/// `mac`. Each field is read on its own, so a bad `broadcast` is reported as
/// such even when `mac` is fine.
pub async fn wake<P, W>(
    State(state): State<AppState<P, W>>,
    body: Bytes,
) -> Result<Json<ControlResponse>, ApiError>
where
    P: PowerControl + Send + Sync + 'static,
    W: WakeSender + Send + Sync + 'static,
{
    let request = parse_wake_request(&body);
    let target = WakeTarget::parse(request.mac.as_deref(), request.broadcast.as_deref())?;

    state.control_service.wake(target).await?;

    let mut response = ControlResponse::success("Wake-on-LAN packet sent successfully");
    response.mac = request.mac;
    Ok(Json(response))
}

fn parse_wake_request(body: &[u8]) -> WakeRequest {
    if body.iter().all(u8::is_ascii_whitespace) {
        return WakeRequest::default();
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => WakeRequest {
            mac: text_field(&fields, "mac"),
            broadcast: text_field(&fields, "broadcast"),
        },
        Ok(other) => {
            tracing::debug!(kind = json_kind(&other), "wake body is not an object");
            WakeRequest::default()
        }
        Err(err) => {
            tracing::debug!(error = %err, "unreadable wake body");
            WakeRequest::default()
        }
    }
}

/// `null` counts as absent; any other non-string keeps its JSON text so
/// validation can name it.
fn text_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    match fields.get(name)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_empty_body_as_missing_fields() {
        let request = parse_wake_request(b"  \n");
        assert!(request.mac.is_none());
        assert!(request.broadcast.is_none());
    }

    #[test]
    fn should_parse_wake_body() {
        let request =
            parse_wake_request(br#"{"mac":"AA:BB:CC:DD:EE:FF","broadcast":"10.0.0.255"}"#);
        assert_eq!(request.mac.as_deref(), Some("AA:BB:CC:DD:EE:FF"));
        assert_eq!(request.broadcast.as_deref(), Some("10.0.0.255"));
    }

    #[test]
    fn should_treat_malformed_json_as_missing_fields() {
        assert!(parse_wake_request(b"{mac:").mac.is_none());
        assert!(parse_wake_request(br#"["AA:BB:CC:DD:EE:FF"]"#).mac.is_none());
        assert!(parse_wake_request(br#"{"mac": null}"#).mac.is_none());
    }

    #[test]
    fn should_read_each_field_independently() {
        let request = parse_wake_request(br#"{"mac":"AA:BB:CC:DD:EE:FF","broadcast":5}"#);
        assert_eq!(request.mac.as_deref(), Some("AA:BB:CC:DD:EE:FF"));
        assert_eq!(request.broadcast.as_deref(), Some("5"));

        let request = parse_wake_request(br#"{"mac":42}"#);
        assert_eq!(request.mac.as_deref(), Some("42"));
    }

    #[test]
    fn should_omit_mac_when_absent() {
        let value = serde_json::to_value(ControlResponse::success("Shutdown cancelled")).unwrap();
        assert_eq!(value["status"], "success");
        assert!(value.get("mac").is_none());
    }
}
