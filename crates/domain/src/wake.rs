//! Wake-on-LAN targets.

use std::net::Ipv4Addr;

use crate::error::ValidationError;
use crate::mac::MacAddress;

/// Address used when the caller does not pick a broadcast address.
pub const LIMITED_BROADCAST: Ipv4Addr = Ipv4Addr::BROADCAST;

/// UDP port magic packets are sent to (discard service).
pub const WAKE_PORT: u16 = 9;

/// Validated destination of a magic packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeTarget {
    pub mac: MacAddress,
    pub broadcast: Ipv4Addr,
}

impl WakeTarget {
    /// Target `mac` through the limited broadcast address.
    #[must_use]
    pub fn new(mac: MacAddress) -> Self {
        Self {
            mac,
            broadcast: LIMITED_BROADCAST,
        }
    }

    #[must_use]
    pub fn with_broadcast(mut self, broadcast: Ipv4Addr) -> Self {
        self.broadcast = broadcast;
        self
    }

    /// Validate raw request fields.
    ///
    /// Blank values are treated as absent, so a blank `broadcast` falls back
    /// to [`LIMITED_BROADCAST`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingMac`] when `mac` is absent or blank,
    /// and the matching `Invalid*` variant when a field does not parse.
    pub fn parse(mac: Option<&str>, broadcast: Option<&str>) -> Result<Self, ValidationError> {
        let mac = mac
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(ValidationError::MissingMac)?
            .parse::<MacAddress>()?;

        let target = Self::new(mac);
        match broadcast.map(str::trim).filter(|value| !value.is_empty()) {
            None => Ok(target),
            Some(raw) => raw
                .parse::<Ipv4Addr>()
                .map(|addr| target.with_broadcast(addr))
                .map_err(|_| ValidationError::InvalidBroadcast(raw.to_string())),
        }
    }
}
