//! Wake-on-LAN over UDP.

use std::future::Future;
use std::net::{Ipv4Addr, SocketAddrV4};

use tokio::net::UdpSocket;

use powerctl_app::ports::WakeSender;
use powerctl_domain::error::HostError;
use powerctl_domain::wake::{WAKE_PORT, WakeTarget};

use crate::error::SystemError;

/// [`WakeSender`] that sends one magic packet per call from an ephemeral
/// broadcast-enabled socket.
#[derive(Debug, Clone)]
pub struct UdpWakeSender {
    port: u16,
}

impl Default for UdpWakeSender {
    fn default() -> Self {
        Self { port: WAKE_PORT }
    }
}

impl UdpWakeSender {
    /// Send to the standard discard port.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Send to a different UDP port.
    #[must_use]
    pub fn with_port(port: u16) -> Self {
        Self { port }
    }

    async fn send_packet(&self, target: WakeTarget) -> Result<(), SystemError> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))
            .await
            .map_err(SystemError::Socket)?;
        socket.set_broadcast(true).map_err(SystemError::Socket)?;

        let destination = SocketAddrV4::new(target.broadcast, self.port);
        let packet = target.mac.magic_packet();
        socket
            .send_to(&packet, destination)
            .await
            .map_err(|source| SystemError::Send {
                destination,
                source,
            })?;

        tracing::debug!(mac = %target.mac, %destination, "magic packet sent");
        Ok(())
    }
}

impl WakeSender for UdpWakeSender {
    fn send(&self, target: WakeTarget) -> impl Future<Output = Result<(), HostError>> + Send {
        async move { self.send_packet(target).await.map_err(Into::into) }
    }
}
