//! Host adapter error types.

use std::net::SocketAddrV4;

/// Errors raised while driving the host.
///
/// The `Display` text is returned to API callers as-is, so it carries the
/// underlying cause.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    /// The command could not be started at all.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited unsuccessfully.
    #[error("Command failed: {command}{}: {detail}", exit_label(.exit_code))]
    Failed {
        command: String,
        exit_code: Option<i32>,
        detail: String,
    },

    /// The command did not finish in time and was killed.
    #[error("`{command}` timed out after {timeout_ms} ms")]
    TimedOut { command: String, timeout_ms: u128 },

    /// The UDP socket could not be prepared.
    #[error("failed to open wake-on-LAN socket: {0}")]
    Socket(#[source] std::io::Error),

    /// The magic packet could not be sent.
    #[error("failed to send magic packet to {destination}: {source}")]
    Send {
        destination: SocketAddrV4,
        #[source]
        source: std::io::Error,
    },
}

fn exit_label(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!(" (exit code {code})"),
        None => " (terminated by signal)".to_string(),
    }
}
