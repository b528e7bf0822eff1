//! Control service: the host power use-cases behind the control server.

use std::time::Instant;

use powerctl_domain::error::{Operation, PowerCtlError};
use powerctl_domain::health::HealthReport;
use powerctl_domain::wake::WakeTarget;

use crate::ports::{PowerControl, WakeSender};

/// Application service for shutdown, cancel, wake and uptime.
///
/// Holds no mutable state: every call is independent.
pub struct ControlService<P, W> {
    power: P,
    waker: W,
    started: Instant,
}

impl<P: PowerControl, W: WakeSender> ControlService<P, W> {
    /// Create a new service; uptime is measured from this call.
    pub fn new(power: P, waker: W) -> Self {
        Self {
            power,
            waker,
            started: Instant::now(),
        }
    }

    /// Current uptime snapshot.
    #[must_use]
    pub fn health(&self) -> HealthReport {
        HealthReport::new(self.started.elapsed())
    }

    /// Schedule a delayed host shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`PowerCtlError::Upstream`] carrying the OS error text.
    pub async fn schedule_shutdown(&self) -> Result<(), PowerCtlError> {
        tracing::info!("shutdown requested");
        self.power.schedule_shutdown().await.map_err(|source| {
            tracing::error!(error = %source, "shutdown command failed");
            PowerCtlError::upstream(Operation::Shutdown, source)
        })?;
        tracing::info!("shutdown scheduled");
        Ok(())
    }

    /// Cancel a pending shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`PowerCtlError::Upstream`] when the OS refuses, which
    /// includes the case where no shutdown was pending.
    pub async fn cancel_shutdown(&self) -> Result<(), PowerCtlError> {
        tracing::info!("shutdown cancellation requested");
        self.power.cancel_shutdown().await.map_err(|source| {
            tracing::error!(error = %source, "cancel shutdown command failed");
            PowerCtlError::upstream(Operation::CancelShutdown, source)
        })?;
        tracing::info!("shutdown cancelled");
        Ok(())
    }

    /// Send one magic packet to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`PowerCtlError::Upstream`] when the packet could not be sent.
    pub async fn wake(&self, target: WakeTarget) -> Result<(), PowerCtlError> {
        tracing::info!(mac = %target.mac, broadcast = %target.broadcast, "wake requested");
        self.waker.send(target).await.map_err(|source| {
            tracing::error!(error = %source, mac = %target.mac, "wake-on-LAN send failed");
            PowerCtlError::upstream(Operation::Wake, source)
        })?;
        tracing::info!(mac = %target.mac, "wake-on-LAN packet sent");
        Ok(())
    }
}
