//! Stateless decoding of encoded track buffers.

use crate::constants::{unpack_delta, HEADER_SIZE, SCALE_BASE};
use crate::coord::Coordinate;
use crate::precision::scale_of;

/// Decode an encoded track buffer back into coordinates.
///
/// Pure function, safe to call concurrently on disjoint buffers. Returns an
/// empty vector when the buffer is too short to hold the 8-byte header or
/// carries a reserved factor code; a header-only buffer decodes to just the
/// initial coordinate. Never panics.
///
/// # Example
/// ```
/// use tracknib::{decode, Coordinate, Encoder, Precision, Simplification};
///
/// let track = [Coordinate::new(47.0001, 8.0001), Coordinate::new(47.0004, 8.0005)];
/// let mut encoder = Encoder::new(51);
/// let bytes = encoder.encode_with_precision(&track, Precision::X1, Simplification::None);
///
/// let decoded = decode(&bytes);
/// assert_eq!(decoded.len(), 2);
/// assert!((decoded[1].lat - 47.0004).abs() < 0.0001);
/// ```
#[must_use]
pub fn decode(buffer: &[u8]) -> Vec<Coordinate> {
    if buffer.len() < HEADER_SIZE {
        return Vec::new();
    }
    let scale = scale_of(buffer[1]);
    if scale == 0.0 {
        return Vec::new();
    }

    // Initial position: signed 24-bit scaled integers stored top-justified,
    // the arithmetic right shift restores the sign.
    let lat = i32::from_be_bytes([buffer[2], buffer[3], buffer[4], 0]) >> 8;
    let lon = i32::from_be_bytes([buffer[5], buffer[6], buffer[7], 0]) >> 8;

    let mut prev_lat = f64::from(lat) * scale;
    let mut prev_lon = f64::from(lon) * scale;

    let mut coords = Vec::with_capacity(buffer.len() - HEADER_SIZE + 1);
    coords.push(Coordinate::new(prev_lat / SCALE_BASE, prev_lon / SCALE_BASE));

    for &byte in &buffer[HEADER_SIZE..] {
        let (d_lat, d_lon) = unpack_delta(byte);
        prev_lat += f64::from(d_lat) * scale;
        prev_lon += f64::from(d_lon) * scale;
        coords.push(Coordinate::new(prev_lat / SCALE_BASE, prev_lon / SCALE_BASE));
    }

    coords
}
