//! Precision factor codes and the quantization scale table.
//!
//! A factor code selects how many 0.0001 degree base units one delta unit
//! spans. Codes 1-199 are the scale directly (code 10 gives 0.001 degree
//! steps). Codes 227-239 enumerate a coarser non-linear series up to a full
//! degree per unit. Code 0, 200-226 and 240-255 are reserved and map to the
//! invalid scale 0.0.

use serde::{Deserialize, Serialize};

use crate::constants::SCALE_BASE;
use crate::error::InvalidPrecision;

/// Named precision factor codes for the enumerated non-linear range.
///
/// Each variant scales the 0.0001 degree base step by the factor in its
/// name: `X1` keeps the base step, `X10000` quantizes to whole degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Precision {
    /// 0.0001 degree step
    X1 = 227,
    /// 0.0002 degree step
    X2 = 228,
    /// 0.0005 degree step
    X5 = 229,
    /// 0.001 degree step
    X10 = 230,
    /// 0.002 degree step
    X20 = 231,
    /// 0.005 degree step
    X50 = 232,
    /// 0.01 degree step
    X100 = 233,
    /// 0.02 degree step
    X200 = 234,
    /// 0.05 degree step
    X500 = 235,
    /// 0.1 degree step
    X1000 = 236,
    /// 0.2 degree step
    X2000 = 237,
    /// 0.5 degree step
    X5000 = 238,
    /// 1.0 degree step
    X10000 = 239,
}

impl Precision {
    /// Quantization step in degrees for this precision
    #[must_use]
    pub fn step_degrees(self) -> f64 {
        scale_of(self as u8) / SCALE_BASE
    }
}

impl From<Precision> for u8 {
    #[inline]
    fn from(precision: Precision) -> Self {
        precision as Self
    }
}

impl TryFrom<u8> for Precision {
    type Error = InvalidPrecision;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            227 => Ok(Self::X1),
            228 => Ok(Self::X2),
            229 => Ok(Self::X5),
            230 => Ok(Self::X10),
            231 => Ok(Self::X20),
            232 => Ok(Self::X50),
            233 => Ok(Self::X100),
            234 => Ok(Self::X200),
            235 => Ok(Self::X500),
            236 => Ok(Self::X1000),
            237 => Ok(Self::X2000),
            238 => Ok(Self::X5000),
            239 => Ok(Self::X10000),
            _ => Err(InvalidPrecision { code }),
        }
    }
}

/// Scale for a raw factor code, total over the byte domain.
///
/// Returns 0.0 for every reserved code; callers treat that as the invalid
/// sentinel and produce an empty result instead of failing.
pub(crate) fn scale_of(code: u8) -> f64 {
    match code {
        1..=199 => f64::from(code),
        227 => 1.0,
        228 => 2.0,
        229 => 5.0,
        230 => 10.0,
        231 => 20.0,
        232 => 50.0,
        233 => 100.0,
        234 => 200.0,
        235 => 500.0,
        236 => 1000.0,
        237 => 2000.0,
        238 => 5000.0,
        239 => 10000.0,
        _ => 0.0,
    }
}
