//! Control client port: outbound calls from the voice dispatcher to a
//! control server.

use std::future::Future;
use std::sync::Arc;

use powerctl_domain::error::HostError;
use powerctl_domain::health::HealthReport;
use powerctl_domain::mac::MacAddress;

/// Why a control server call did not succeed.
///
/// The `Display` text is what the user hears after "could not …".
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("{reason}")]
    Rejected { status: u16, reason: String },

    /// The request never completed (connect failure, timeout, …).
    #[error("{0}")]
    Transport(#[source] HostError),

    /// The server answered 2xx but the body was not understood.
    #[error("invalid response body: {0}")]
    Decode(#[source] HostError),
}

impl ClientError {
    /// Build a rejection, preferring the server-provided `message`.
    #[must_use]
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        let reason = message
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {status}"));
        Self::Rejected { status, reason }
    }
}

/// A remote control server, as seen by the voice dispatcher.
pub trait ControlClient {
    /// `GET /health`.
    fn health(&self) -> impl Future<Output = Result<HealthReport, ClientError>> + Send;

    /// `POST /wake` for `mac` through the server's default broadcast address.
    fn wake(&self, mac: MacAddress) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// `POST /shutdown`.
    fn shutdown(&self) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// `POST /cancel-shutdown`.
    fn cancel_shutdown(&self) -> impl Future<Output = Result<(), ClientError>> + Send;
}

impl<T: ControlClient + Send + Sync> ControlClient for Arc<T> {
    fn health(&self) -> impl Future<Output = Result<HealthReport, ClientError>> + Send {
        (**self).health()
    }

    fn wake(&self, mac: MacAddress) -> impl Future<Output = Result<(), ClientError>> + Send {
        (**self).wake(mac)
    }

    fn shutdown(&self) -> impl Future<Output = Result<(), ClientError>> + Send {
        (**self).shutdown()
    }

    fn cancel_shutdown(&self) -> impl Future<Output = Result<(), ClientError>> + Send {
        (**self).cancel_shutdown()
    }
}
