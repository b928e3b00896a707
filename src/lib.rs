//! `TrackNib` - Lossy GPS track compression for constrained telemetry links
//!
//! A nibble-packed differential codec that squeezes an ordered sequence of
//! GPS coordinates ("a track") into a few tens of bytes, small enough to ride
//! as one field of a tag-length-value sensor payload on a LoRaWAN-class
//! uplink.
//!
//! # Features
//! - **Tiny output**: 8 header bytes plus one byte per surviving point
//! - **Error-feedback quantization**: rounding residuals are carried into the
//!   next delta, so drift stays bounded over arbitrarily long tracks
//! - **Overflow recovery**: deltas too large for a nibble are bridged with
//!   synthesized intermediate points instead of failing
//! - **Two thinning strategies**: upfront Ramer-Douglas-Peucker over raw
//!   coordinates, or a cheap online merge over the quantized symbol stream
//! - **Bounded size**: encoding truncates cleanly at a caller-chosen maximum
//!
//! # Lossiness
//!
//! The codec is lossy by design: positions are quantized to the step chosen
//! by the precision factor code (0.0001 degrees at the finest). Decoded
//! points deviate from their originals by at most half a quantization step,
//! and simplification may drop points entirely. Exact round-trips are a
//! non-goal; bounded round-trips are the contract.
//!
//! # Example
//! ```
//! use tracknib::{decode, Coordinate, Encoder, Precision, Simplification};
//!
//! let track = vec![
//!     Coordinate::new(47.41235, 8.55000),
//!     Coordinate::new(47.41260, 8.55033),
//!     Coordinate::new(47.41282, 8.55067),
//!     Coordinate::new(47.41310, 8.55101),
//! ];
//!
//! let mut encoder = Encoder::new(51);
//! let bytes = encoder.encode_with_precision(&track, Precision::X1, Simplification::None);
//! assert_eq!(bytes.len(), 8 + 3); // header plus one delta byte per point
//!
//! let decoded = decode(&bytes);
//! assert_eq!(decoded.len(), track.len());
//! for (original, roundtripped) in track.iter().zip(&decoded) {
//!     assert!((original.lat - roundtripped.lat).abs() < 0.0001);
//!     assert!((original.lon - roundtripped.lon).abs() < 0.0001);
//! }
//! ```
//!
//! # Wire Format
//!
//! ## Header (8 bytes, big-endian)
//!
//! | Offset | Size | Field | Description |
//! |--------|------|-------|-------------|
//! | 0 | 1 | `length` | Total buffer length including the header, self-describing. |
//! | 1 | 1 | `factor` | Precision factor code (see [`Precision`]). |
//! | 2 | 3 | `lat` | Initial latitude: signed 24-bit `round(degrees * 10000 / scale)`. |
//! | 5 | 3 | `lon` | Initial longitude, same encoding. |
//!
//! ## Delta bytes
//!
//! Every byte after the header packs two independent signed 4-bit deltas:
//! the high nibble moves latitude, the low nibble longitude, each in scaled
//! units relative to the previous point. Degrees are recovered as
//! `scaled_units * scale / 10000`.
//!
//! # Failure Model
//!
//! No operation panics or returns a typed error. Malformed input (too few
//! points, reserved factor code, undersized decode buffer) yields an empty
//! result; out-of-range points and the output size bound truncate the result
//! instead. Callers check the returned length against their expectations.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

mod constants;
mod coord;
mod decoder;
mod encoder;
mod error;
mod precision;
mod simplify;
mod stats;

#[cfg(test)]
mod tests;

// Re-export public API
pub use coord::Coordinate;
pub use decoder::decode;
pub use encoder::{Encoder, Simplification};
pub use error::InvalidPrecision;
pub use precision::Precision;
pub use stats::Stats;
