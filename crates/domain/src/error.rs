//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PowerCtlError`] at the port boundary.

use std::fmt;

/// Opaque failure reported by a host primitive (OS command, socket, …).
///
/// The text of this error is surfaced verbatim to API callers.
pub type HostError = Box<dyn std::error::Error + Send + Sync>;

/// Host-control side effect that can fail upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Shutdown,
    CancelShutdown,
    Wake,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shutdown => f.write_str("Failed to shutdown computer"),
            Self::CancelShutdown => f.write_str("Failed to cancel shutdown"),
            Self::Wake => f.write_str("Failed to send wake-on-LAN packet"),
        }
    }
}

/// Top-level error for control operations.
#[derive(Debug, thiserror::Error)]
pub enum PowerCtlError {
    /// Missing or mismatching bearer token.
    #[error("Unauthorized")]
    Unauthorized,

    /// A request field failed validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// An OS command or network primitive failed.
    #[error("{operation}")]
    Upstream {
        operation: Operation,
        #[source]
        source: HostError,
    },
}

impl PowerCtlError {
    /// Wrap a host failure for the given operation.
    pub fn upstream(operation: Operation, source: impl Into<HostError>) -> Self {
        Self::Upstream {
            operation,
            source: source.into(),
        }
    }
}

/// Request validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("MAC address is required")]
    MissingMac,

    #[error("invalid MAC address `{0}`")]
    InvalidMac(String),

    #[error("invalid broadcast address `{0}`")]
    InvalidBroadcast(String),
}
