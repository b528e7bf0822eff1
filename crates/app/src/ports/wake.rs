//! Wake port: fire-and-forget magic packet emission.

use std::future::Future;
use std::sync::Arc;

use powerctl_domain::error::HostError;
use powerctl_domain::wake::WakeTarget;

/// Sends Wake-on-LAN magic packets.
///
/// Success means the packet left the host, not that the target woke up.
pub trait WakeSender {
    fn send(&self, target: WakeTarget) -> impl Future<Output = Result<(), HostError>> + Send;
}

impl<T: WakeSender + Send + Sync> WakeSender for Arc<T> {
    fn send(&self, target: WakeTarget) -> impl Future<Output = Result<(), HostError>> + Send {
        (**self).send(target)
    }
}
