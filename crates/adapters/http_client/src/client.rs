//! reqwest-backed control server client.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;

use powerctl_app::auth::ApiKey;
use powerctl_app::ports::{ClientError, ControlClient};
use powerctl_domain::health::HealthReport;
use powerctl_domain::mac::MacAddress;

/// Settings for [`HttpControlClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the control server, e.g. `http://192.168.1.10:3000`.
    pub base_url: String,
    /// Shared bearer secret.
    pub api_key: ApiKey,
    /// Limit for each request, connect included.
    pub timeout: Duration,
}

/// Errors raised while building the client.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("control server URL must not be empty")]
    EmptyBaseUrl,

    #[error("failed to build HTTP client")]
    Build(#[from] reqwest::Error),
}

impl ClientConfig {
    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the base URL is blank or the TLS backend
    /// cannot be initialised.
    pub fn build(self) -> Result<HttpControlClient, ConfigError> {
        let base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("powerctl-skill/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpControlClient {
            http,
            base_url,
            bearer: self.api_key.bearer(),
        })
    }
}

/// Error body returned by the control server.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

#[derive(serde::Serialize)]
struct WakeBody {
    mac: MacAddress,
}

/// HTTP client for a powerctl control server.
#[derive(Debug, Clone)]
pub struct HttpControlClient {
    http: reqwest::Client,
    base_url: String,
    bearer: String,
}

impl HttpControlClient {
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{path}", self.base_url))
            .header(AUTHORIZATION, &self.bearer)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await.map_err(|err| {
            tracing::warn!(error = %err, "control server unreachable");
            ClientError::Transport(err.into())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.message.or(body.error));
        tracing::warn!(status = status.as_u16(), "control server rejected request");
        Err(ClientError::rejected(status.as_u16(), message))
    }

    async fn post(&self, path: &str) -> Result<(), ClientError> {
        self.send(self.request(reqwest::Method::POST, path)).await?;
        Ok(())
    }

    async fn fetch_health(&self) -> Result<HealthReport, ClientError> {
        let response = self.send(self.request(reqwest::Method::GET, "/health")).await?;
        let body = response
            .bytes()
            .await
            .map_err(|err| ClientError::Transport(err.into()))?;
        serde_json::from_slice(&body).map_err(|err| ClientError::Decode(err.into()))
    }

    async fn post_wake(&self, mac: MacAddress) -> Result<(), ClientError> {
        let request = self
            .request(reqwest::Method::POST, "/wake")
            .json(&WakeBody { mac });
        self.send(request).await?;
        Ok(())
    }
}

impl ControlClient for HttpControlClient {
    fn health(&self) -> impl Future<Output = Result<HealthReport, ClientError>> + Send {
        self.fetch_health()
    }

    fn wake(&self, mac: MacAddress) -> impl Future<Output = Result<(), ClientError>> + Send {
        self.post_wake(mac)
    }

    fn shutdown(&self) -> impl Future<Output = Result<(), ClientError>> + Send {
        self.post("/shutdown")
    }

    fn cancel_shutdown(&self) -> impl Future<Output = Result<(), ClientError>> + Send {
        self.post("/cancel-shutdown")
    }
}
