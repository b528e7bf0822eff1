//! # powerctl-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **control API** (`/`, `/health`, `/shutdown`,
//!   `/cancel-shutdown`, `/wake`) as JSON
//! - Enforce the **bearer token** on mutating routes before any handler runs
//! - Serve the **skill endpoint** that accepts voice-platform envelopes and
//!   answers with speech
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `powerctl-app` (for port traits and services) and
//! `powerctl-domain` (for request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod auth;
pub mod error;
pub mod router;
pub mod skill;
pub mod state;
