//! # powerctl-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PowerControl`: schedule and cancel an OS shutdown
//!   - `WakeSender`: emit a Wake-on-LAN magic packet
//!   - `ControlClient`: call a remote control server
//! - Define **driving/inbound** use-cases:
//!   - `ControlService`: shutdown, cancel, wake, uptime
//!   - `VoiceDispatcher`: map voice requests to control calls and speech
//! - Verify the shared-secret bearer token (`ApiKey`)
//!
//! ## Dependency rule
//! Depends on `powerctl-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod auth;
pub mod ports;
pub mod services;
