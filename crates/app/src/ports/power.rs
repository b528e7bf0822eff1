//! Power port: the OS shutdown primitives.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use powerctl_domain::error::HostError;

/// Grace period between a shutdown request and the host powering off.
pub const SHUTDOWN_DELAY: Duration = Duration::from_secs(60);

/// Schedules and cancels a delayed host shutdown.
pub trait PowerControl {
    /// Ask the OS to power off after [`SHUTDOWN_DELAY`].
    fn schedule_shutdown(&self) -> impl Future<Output = Result<(), HostError>> + Send;

    /// Ask the OS to abort a pending shutdown.
    ///
    /// Whatever the OS reports is returned as-is, including the case where
    /// nothing was pending.
    fn cancel_shutdown(&self) -> impl Future<Output = Result<(), HostError>> + Send;
}

impl<T: PowerControl + Send + Sync> PowerControl for Arc<T> {
    fn schedule_shutdown(&self) -> impl Future<Output = Result<(), HostError>> + Send {
        (**self).schedule_shutdown()
    }

    fn cancel_shutdown(&self) -> impl Future<Output = Result<(), HostError>> + Send {
        (**self).cancel_shutdown()
    }
}
