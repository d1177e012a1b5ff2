//! # irpilot-core - Core Domain Types
//!
//! Foundation crate for irpilot. Provides the device domain model
//! (remotes and buttons), error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Remote`] - A named collection of buttons mirroring one physical remote
//! - [`Button`] - A named signal slot, possibly holding a captured waveform
//! - [`normalized_name()`] - Client-side name validation (trimmed, non-empty)
//! - [`sanitize_label()`] - Strip control characters before terminal display
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use irpilot_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all irpilot crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result};
pub use types::{find_remote, normalized_name, sanitize_label, Button, ButtonId, Remote, RemoteId};
