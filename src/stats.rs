//! Encoding statistics.

use serde::{Deserialize, Serialize};

/// Counters describing what happened to the input during the last encode
///
/// Purely observational: callers can use these to judge how aggressively a
/// track was thinned at the chosen precision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Input coordinates directly represented by a delta in the output
    pub kept: u32,
    /// Intermediate coordinates synthesized during overflow recovery
    pub added: u32,
    /// Coordinates dropped as zero-delta or merged into their predecessor
    pub removed: u32,
}
