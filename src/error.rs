//! Error types for tracknib conversion surfaces.
//!
//! The codec operations themselves never fail loudly: `encode` and `decode`
//! report malformed input through empty or truncated results. The only typed
//! error lives at the `Precision` conversion boundary.

use std::fmt;

/// Error returned when a raw byte is not a named precision code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPrecision {
    /// The rejected factor code
    pub code: u8,
}

impl fmt::Display for InvalidPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "factor code {} is not a named precision (expected 227-239)",
            self.code
        )
    }
}

impl std::error::Error for InvalidPrecision {}
