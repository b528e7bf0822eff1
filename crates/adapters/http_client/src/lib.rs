//! # powerctl-adapter-http-client
//!
//! [`ControlClient`](powerctl_app::ports::ControlClient) implementation over
//! HTTP using [reqwest](https://docs.rs/reqwest).
//!
//! Every request carries the shared bearer secret and a bounded timeout;
//! a timeout is reported like any other transport failure.

mod client;

pub use client::{ClientConfig, ConfigError, HttpControlClient};
