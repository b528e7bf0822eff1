//! # powerctl-adapter-system
//!
//! Driven adapters that touch the host itself.
//!
//! ## Responsibilities
//! - [`SystemPowerControl`]: runs the platform `shutdown` command to schedule
//!   or cancel a delayed power-off, with a bounded timeout
//! - [`UdpWakeSender`]: emits one Wake-on-LAN magic packet over a
//!   broadcast-enabled UDP socket
//!
//! ## Dependency rule
//! Implements port traits from `powerctl-app`; never depends on other adapters.

pub mod error;
pub mod power;
pub mod wake;

pub use error::SystemError;
pub use power::{CommandLine, SystemPowerControl};
pub use wake::UdpWakeSender;
