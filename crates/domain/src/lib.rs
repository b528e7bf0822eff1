//! # powerctl-domain
//!
//! Pure domain model for the powerctl host power controller.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **MAC addresses** and the Wake-on-LAN **magic packet** layout
//! - Define **wake targets** (validated MAC + broadcast address)
//! - Define the **health report** exchanged between server and dispatcher
//! - Define **voice intents**, requests and the spoken **utterances** they produce
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod health;
pub mod intent;
pub mod mac;
pub mod speech;
pub mod wake;
