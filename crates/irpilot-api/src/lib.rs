//! irpilot-api - Device HTTP client for irpilot
//!
//! Wraps the REST-style JSON API exposed by the IR learning device in typed
//! async methods. This crate is the **only** path through which the
//! application touches the device; everything above it works with
//! [`irpilot_core`] domain types and the normalized [`ApiError`] taxonomy.

pub mod client;
pub mod error;
pub mod wire;

pub use client::DeviceClient;
pub use error::{ApiError, ApiResult};
pub use wire::RemotesResponse;
