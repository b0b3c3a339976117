//! # tempus-core - Core Domain Types
//!
//! Foundation crate for tempus. Provides the clock math, theme/mode domain
//! types, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Clock (`clock`)
//! - [`ClockReading`] - A sampled wall-clock instant (12h hours, minutes, seconds)
//! - [`HandAngles`] - Fractional-degree rotations for the three hands
//!
//! ### Domain Types (`types`)
//! - [`Mode`] - Light/dark visual mode with its persisted string form
//! - [`KNOWN_THEMES`], [`DEFAULT_THEME`] - The enumerated theme set
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use tempus_core::prelude::*;
//! ```

pub mod clock;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all tempus crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use clock::{ClockReading, HandAngles};
pub use error::{Error, Result};
pub use types::{Mode, DEFAULT_THEME, KNOWN_THEMES};
