//! Internal constants and nibble helpers for the wire format.

/// Scaled units per degree at scale 1.0 (0.0001 degree resolution)
pub(crate) const SCALE_BASE: f64 = 10000.0;

/// Encoded header size in bytes (length + factor + 24-bit lat + 24-bit lon)
pub(crate) const HEADER_SIZE: usize = 8;

/// Magnitude bound of one signed 4-bit delta
pub(crate) const NIBBLE_MAX: f64 = 7.0;

/// Pack a signed delta pair into one byte, delta-latitude in the high nibble.
///
/// Both values must be in [-8, 7]; only the low four bits of each survive.
#[inline]
pub(crate) fn pack_delta(d_lat: i32, d_lon: i32) -> u8 {
    (((d_lat as u8) & 0x0F) << 4) | ((d_lon as u8) & 0x0F)
}

/// Unpack a delta byte into sign-extended (delta-latitude, delta-longitude).
///
/// The arithmetic shift on `i8` sign-extends each 4-bit field without any
/// reliance on bit-field memory layout.
#[inline]
pub(crate) fn unpack_delta(byte: u8) -> (i32, i32) {
    let d_lat = (byte as i8) >> 4;
    let d_lon = ((byte << 4) as i8) >> 4;
    (i32::from(d_lat), i32::from(d_lon))
}
