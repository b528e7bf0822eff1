//! Axum router assembly.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use powerctl_app::ports::{ControlClient, PowerControl, WakeSender};

use crate::error::ErrorBody;
use crate::state::{AppState, SkillState};

/// Build the control server [`Router`].
///
/// Unknown paths fall through to a JSON `404`. A panicking handler becomes a
/// JSON `500`. CORS is fully permissive. Includes a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<P, W>(state: AppState<P, W>) -> Router
where
    P: PowerControl + Send + Sync + 'static,
    W: WakeSender + Send + Sync + 'static,
{
    crate::api::routes(&state)
        .fallback(crate::api::not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the voice skill [`Router`]: `POST /` for platform requests and
/// `GET /health` for liveness.
pub fn build_skill<C>(state: SkillState<C>) -> Router
where
    C: ControlClient + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(crate::skill::handle::<C>))
        .route("/health", get(crate::skill::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(%detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new("Internal server error", detail)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use powerctl_app::auth::ApiKey;
    use powerctl_app::ports::ClientError;
    use powerctl_app::services::control_service::ControlService;
    use powerctl_app::services::voice_dispatcher::VoiceDispatcher;
    use powerctl_domain::error::HostError;
    use powerctl_domain::health::HealthReport;
    use powerctl_domain::mac::MacAddress;
    use powerctl_domain::time;
    use powerctl_domain::wake::WakeTarget;
    use tower::ServiceExt;

    use super::*;

    const KEY: &str = "s3cret";

    #[derive(Default)]
    struct RecordingPower {
        calls: Mutex<Vec<&'static str>>,
        failure: Option<&'static str>,
        panics: bool,
    }

    impl RecordingPower {
        fn failing(message: &'static str) -> Self {
            Self {
                failure: Some(message),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: &'static str) -> Result<(), HostError> {
            assert!(!self.panics, "power backend exploded");
            self.calls.lock().unwrap().push(call);
            match self.failure {
                Some(message) => Err(message.into()),
                None => Ok(()),
            }
        }
    }

    impl PowerControl for RecordingPower {
        async fn schedule_shutdown(&self) -> Result<(), HostError> {
            self.record("shutdown")
        }

        async fn cancel_shutdown(&self) -> Result<(), HostError> {
            self.record("cancel")
        }
    }

    #[derive(Default)]
    struct RecordingWaker {
        targets: Mutex<Vec<WakeTarget>>,
    }

    impl RecordingWaker {
        fn targets(&self) -> Vec<WakeTarget> {
            self.targets.lock().unwrap().clone()
        }
    }

    impl WakeSender for RecordingWaker {
        async fn send(&self, target: WakeTarget) -> Result<(), HostError> {
            self.targets.lock().unwrap().push(target);
            Ok(())
        }
    }

    struct Harness {
        power: Arc<RecordingPower>,
        waker: Arc<RecordingWaker>,
        app: Router,
    }

    fn harness_with(power: RecordingPower) -> Harness {
        let power = Arc::new(power);
        let waker = Arc::new(RecordingWaker::default());
        let state = AppState::new(
            ControlService::new(Arc::clone(&power), Arc::clone(&waker)),
            ApiKey::new(KEY),
        );
        Harness {
            power,
            waker,
            app: build(state),
        }
    }

    fn harness() -> Harness {
        harness_with(RecordingPower::default())
    }

    fn authorized(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {KEY}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn anonymous(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn should_report_running_on_root() {
        let (status, body) = send(harness().app, anonymous("GET", "/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Computer Control Server is running");
        assert_eq!(body["status"], "online");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn should_report_health_without_auth() {
        let (status, body) = send(harness().app, anonymous("GET", "/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    }

    #[tokio::test]
    async fn should_report_non_decreasing_uptime() {
        let Harness { app, .. } = harness();

        let (_, first) = send(app.clone(), anonymous("GET", "/health")).await;
        let (_, second) = send(app, anonymous("GET", "/health")).await;

        let first: HealthReport = serde_json::from_value(first).unwrap();
        let second: HealthReport = serde_json::from_value(second).unwrap();
        assert!(second.uptime >= first.uptime);
    }

    #[tokio::test]
    async fn should_reject_mutating_routes_without_valid_token() {
        let headers = [
            None,
            Some("Bearer nope"),
            Some(KEY),
            Some("bearer s3cret"),
            Some("Basic s3cret"),
        ];
        for path in ["/shutdown", "/cancel-shutdown", "/wake"] {
            for value in headers {
                let Harness { power, waker, app } = harness();
                let mut builder = Request::builder().method("POST").uri(path);
                if let Some(value) = value {
                    builder = builder.header(header::AUTHORIZATION, value);
                }
                let request = builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"mac":"AA:BB:CC:DD:EE:FF"}"#))
                    .unwrap();

                let (status, body) = send(app, request).await;

                assert_eq!(status, StatusCode::UNAUTHORIZED, "{path} with {value:?}");
                assert_eq!(body, serde_json::json!({"error": "Unauthorized"}));
                assert!(power.calls().is_empty(), "{path} with {value:?}");
                assert!(waker.targets().is_empty(), "{path} with {value:?}");
            }
        }
    }

    #[tokio::test]
    async fn should_schedule_shutdown() {
        let Harness { power, app, .. } = harness();
        let before = time::now();

        let (status, body) = send(app, authorized("POST", "/shutdown", "")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Computer will shutdown in 1 minute");
        assert_eq!(body["status"], "success");
        let stamped: time::Timestamp =
            serde_json::from_value(body["timestamp"].clone()).unwrap();
        assert!(stamped >= before);
        assert_eq!(power.calls(), vec!["shutdown"]);
    }

    #[tokio::test]
    async fn should_cancel_shutdown() {
        let Harness { power, app, .. } = harness();

        let (status, body) = send(app, authorized("POST", "/cancel-shutdown", "")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Shutdown cancelled");
        assert_eq!(power.calls(), vec!["cancel"]);
    }

    #[tokio::test]
    async fn should_surface_cancel_failure_as_server_error() {
        let Harness { app, .. } =
            harness_with(RecordingPower::failing("shutdown: no pending shutdown"));

        let (status, body) = send(app, authorized("POST", "/cancel-shutdown", "")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to cancel shutdown");
        assert_eq!(body["message"], "shutdown: no pending shutdown");
    }

    #[tokio::test]
    async fn should_require_mac_for_wake() {
        for payload in [
            "",
            "{}",
            "not json",
            r#"{"mac":""}"#,
            r#"{"broadcast":"10.0.0.255"}"#,
        ] {
            let Harness { waker, app, .. } = harness();

            let (status, body) = send(app, authorized("POST", "/wake", payload)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload:?}");
            assert_eq!(body["error"], "MAC address is required");
            assert_eq!(
                body["message"],
                "Please provide the MAC address of the computer to wake up"
            );
            assert!(waker.targets().is_empty());
        }
    }

    #[tokio::test]
    async fn should_wake_through_default_broadcast() {
        let Harness { waker, app, .. } = harness();

        let (status, body) = send(
            app,
            authorized("POST", "/wake", r#"{"mac":"aa-bb-cc-dd-ee-ff"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Wake-on-LAN packet sent successfully");
        assert_eq!(body["mac"], "aa-bb-cc-dd-ee-ff");
        let mac: MacAddress = "AA:BB:CC:DD:EE:FF".parse().unwrap();
        assert_eq!(waker.targets(), vec![WakeTarget::new(mac)]);
        assert_eq!(waker.targets()[0].broadcast, Ipv4Addr::BROADCAST);
    }

    #[tokio::test]
    async fn should_wake_through_given_broadcast() {
        let Harness { waker, app, .. } = harness();

        let (status, _) = send(
            app,
            authorized(
                "POST",
                "/wake",
                r#"{"mac":"AA:BB:CC:DD:EE:FF","broadcast":"192.168.1.255"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            waker.targets()[0].broadcast,
            Ipv4Addr::new(192, 168, 1, 255)
        );
    }

    #[tokio::test]
    async fn should_reject_invalid_mac_and_broadcast() {
        let cases = [
            (r#"{"mac":"not-a-mac"}"#, "Invalid MAC address"),
            (
                r#"{"mac":"AA:BB:CC:DD:EE:FF","broadcast":"nowhere"}"#,
                "Invalid broadcast address",
            ),
            (
                r#"{"mac":"AA:BB:CC:DD:EE:FF","broadcast":5}"#,
                "Invalid broadcast address",
            ),
            (r#"{"mac":42}"#, "Invalid MAC address"),
        ];
        for (payload, error) in cases {
            let Harness { waker, app, .. } = harness();

            let (status, body) = send(app, authorized("POST", "/wake", payload)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload:?}");
            assert_eq!(body["error"], error);
            assert!(waker.targets().is_empty());
        }
    }

    #[tokio::test]
    async fn should_answer_not_found_for_unknown_path() {
        let (status, body) = send(harness().app, anonymous("GET", "/reboot")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            serde_json::json!({
                "error": "Not found",
                "message": "The requested endpoint does not exist"
            })
        );
    }

    #[tokio::test]
    async fn should_answer_not_found_for_wrong_method() {
        let Harness { power, app, .. } = harness();

        let (status, body) = send(app.clone(), anonymous("GET", "/shutdown")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");

        let (status, _) = send(app, authorized("DELETE", "/health", "")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(power.calls().is_empty());
    }

    #[tokio::test]
    async fn should_allow_any_origin() {
        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .header(header::ORIGIN, "https://example.org")
            .body(Body::empty())
            .unwrap();

        let response = harness().app.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn should_turn_panic_into_server_error() {
        let Harness { app, .. } = harness_with(RecordingPower {
            panics: true,
            ..RecordingPower::default()
        });

        let (status, body) = send(app, authorized("POST", "/shutdown", "")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["message"], "power backend exploded");
    }

    struct OfflineClient;

    impl ControlClient for OfflineClient {
        async fn health(&self) -> Result<HealthReport, ClientError> {
            Err(ClientError::Transport("connection refused".into()))
        }

        async fn wake(&self, _mac: MacAddress) -> Result<(), ClientError> {
            Ok(())
        }

        async fn shutdown(&self) -> Result<(), ClientError> {
            Ok(())
        }

        async fn cancel_shutdown(&self) -> Result<(), ClientError> {
            Ok(())
        }
    }

    fn skill_app() -> Router {
        let mac: MacAddress = "00:11:22:33:44:55".parse().unwrap();
        build_skill(SkillState::new(VoiceDispatcher::new(OfflineClient, mac)))
    }

    fn skill_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_answer_skill_intent() {
        let payload = serde_json::json!({
            "version": "1.0",
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.1",
                "locale": "en-US",
                "intent": {"name": "TurnOnComputerIntent"}
            }
        });

        let (status, body) = send(skill_app(), skill_request(&payload.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], "1.0");
        assert_eq!(body["response"]["outputSpeech"]["type"], "PlainText");
        assert!(
            body["response"]["outputSpeech"]["text"]
                .as_str()
                .unwrap()
                .contains("wake-up signal")
        );
        assert_eq!(body["response"]["shouldEndSession"], true);
    }

    #[tokio::test]
    async fn should_apologize_for_malformed_skill_request() {
        let (status, body) = send(skill_app(), skill_request("not json")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"]["shouldEndSession"], false);
        assert!(body["response"]["outputSpeech"]["text"].is_string());
    }

    #[tokio::test]
    async fn should_report_skill_health() {
        let response = skill_app()
            .oneshot(anonymous("GET", "/health"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }
}
