//! Differential encoder for compact track compression.

use serde::{Deserialize, Serialize};

use crate::constants::{pack_delta, unpack_delta, HEADER_SIZE, NIBBLE_MAX, SCALE_BASE};
use crate::coord::Coordinate;
use crate::precision::{scale_of, Precision};
use crate::simplify::douglas_peucker;
use crate::stats::Stats;

/// Largest buffer length the self-describing length byte can express
const MAX_BUFFER_LEN: usize = u8::MAX as usize;

/// Simplification applied to a track while encoding
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Simplification {
    /// Encode every input point as-is
    None,
    /// Cheap online merge of near-collinear deltas, applied directly to the
    /// already-quantized symbol stream
    PerpendicularDistance,
    /// Upfront Ramer-Douglas-Peucker pass over the raw coordinates
    #[default]
    DouglasPeucker,
}

/// Encoder for the nibble-packed track format
///
/// Converts an ordered coordinate sequence into an 8-byte header followed by
/// one byte per surviving point, each byte packing two signed 4-bit deltas.
/// Rounding residuals are carried into the next delta ("error feedback"), so
/// quantization drift stays bounded over the whole track instead of
/// accumulating.
///
/// All mutable state is reset at the start of every [`encode`](Self::encode)
/// call; one encoder must not serve two encodes concurrently.
pub struct Encoder {
    /// Output bound in bytes, clamped to [8, 255]
    max_size: usize,
    buf: Vec<u8>,
    /// Previous point in scaled units, unrounded
    prev_lat: f64,
    prev_lon: f64,
    /// Rounding residual carried into the next delta
    err_lat: f64,
    err_lon: f64,
    stats: Stats,
}

impl Encoder {
    /// Create an encoder bounded to `max_size` output bytes.
    ///
    /// The bound is clamped to [8, 255]: the header always takes 8 bytes and
    /// the length byte at offset 0 must be able to describe the whole buffer.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size: max_size.clamp(HEADER_SIZE, MAX_BUFFER_LEN),
            buf: Vec::new(),
            prev_lat: 0.0,
            prev_lon: 0.0,
            err_lat: 0.0,
            err_lon: 0.0,
            stats: Stats::default(),
        }
    }

    /// The configured output bound in bytes
    #[inline]
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Statistics from the most recent encode
    #[inline]
    #[must_use]
    pub const fn encode_stats(&self) -> Stats {
        self.stats
    }

    /// Encode a track into a byte buffer using a raw factor code.
    ///
    /// `factor` selects the quantization step: 1-199 scale the 0.0001 degree
    /// base step linearly, 227-239 select the enumerated [`Precision`] steps,
    /// everything else is reserved.
    ///
    /// Returns an empty buffer for fewer than two coordinates or a reserved
    /// factor code. Encoding stops early, returning the buffer built so far,
    /// when a point leaves the valid degree ranges or the next delta would
    /// push the buffer past the configured maximum size. Never panics.
    #[must_use]
    pub fn encode(
        &mut self,
        coords: &[Coordinate],
        factor: u8,
        simplification: Simplification,
    ) -> Vec<u8> {
        self.reset();

        if coords.len() < 2 {
            return Vec::new();
        }
        let scale = scale_of(factor);
        if scale == 0.0 {
            return Vec::new();
        }

        // Half a quantization step in degrees: anything Douglas-Peucker
        // removes would have quantized onto the chord anyway.
        let simplified;
        let coords = if simplification == Simplification::DouglasPeucker {
            simplified = douglas_peucker(coords, scale / SCALE_BASE * 0.5);
            &simplified[..]
        } else {
            coords
        };
        if coords.len() < 2 {
            return Vec::new();
        }

        let first_lat = coords[0].lat * SCALE_BASE / scale;
        let first_lon = coords[0].lon * SCALE_BASE / scale;
        self.push_first(first_lat, first_lon, factor);

        let optimize = simplification == Simplification::PerpendicularDistance;
        for point in &coords[1..] {
            if self.buf.len() >= self.max_size {
                break;
            }
            // NaN-safe range check: out-of-range and non-finite points end
            // the track rather than failing the encode.
            let in_range = point.lat.abs() <= 90.0 && point.lon.abs() <= 180.0;
            if !in_range {
                break;
            }
            self.push(
                point.lat * SCALE_BASE / scale,
                point.lon * SCALE_BASE / scale,
                optimize,
            );
        }

        // The length byte is only knowable now; rewriting the header with the
        // same initial point fixes it up.
        self.write_header(first_lat.round() as i32, first_lon.round() as i32, factor);

        std::mem::take(&mut self.buf)
    }

    /// Encode a track using a named precision code.
    ///
    /// Same contract as [`encode`](Self::encode).
    #[must_use]
    pub fn encode_with_precision(
        &mut self,
        coords: &[Coordinate],
        precision: Precision,
        simplification: Simplification,
    ) -> Vec<u8> {
        self.encode(coords, precision.into(), simplification)
    }

    fn reset(&mut self) {
        self.buf.clear();
        self.prev_lat = 0.0;
        self.prev_lon = 0.0;
        self.err_lat = 0.0;
        self.err_lon = 0.0;
        self.stats = Stats::default();
    }

    /// Seed the encoder from the first point: write the header from its
    /// rounded scaled position and carry the rounding residual into the
    /// first delta.
    fn push_first(&mut self, lat: f64, lon: f64, factor: u8) {
        let round_lat = lat.round();
        let round_lon = lon.round();

        self.write_header(round_lat as i32, round_lon as i32, factor);

        self.err_lat = lat - round_lat;
        self.err_lon = lon - round_lon;
        self.prev_lat = lat;
        self.prev_lon = lon;
    }

    /// Feed one point (in scaled units) through the differential stage.
    ///
    /// Runs an explicit LIFO worklist: overflow recovery pushes a synthesized
    /// intermediate point on top of the point that produced it, so the
    /// intermediate is emitted first and the original retried against the
    /// advanced reference position.
    fn push(&mut self, lat: f64, lon: f64, optimize: bool) {
        let mut pending = vec![(lat, lon)];

        while let Some(&(p_lat, p_lon)) = pending.last() {
            if self.buf.len() >= self.max_size {
                return;
            }

            let d_lat = (p_lat - self.prev_lat) + self.err_lat;
            let d_lon = (p_lon - self.prev_lon) + self.err_lon;
            // A non-finite delta (first point beyond numeric range) cannot be
            // quantized or subdivided; end the track here.
            if !d_lat.is_finite() || !d_lon.is_finite() {
                return;
            }
            let round_lat = d_lat.round();
            let round_lon = d_lon.round();

            if round_lat.abs() < 1.0 && round_lon.abs() < 1.0 {
                // Zero delta: drop the point but move the error baseline to
                // it, so fractional motion survives a run of dropped points.
                self.stats.removed += 1;
            } else if round_lat.abs() <= NIBBLE_MAX && round_lon.abs() <= NIBBLE_MAX {
                let synthesized = pending.len() > 1;
                self.write_delta(round_lat as i8, round_lon as i8, optimize, synthesized);
            } else {
                // Delta overflows the nibble range: aim an intermediate point
                // a fraction of the way along, then retry this one.
                let divisor = (d_lat.abs() / NIBBLE_MAX)
                    .max(d_lon.abs() / NIBBLE_MAX)
                    .ceil();
                pending.push((
                    self.prev_lat + d_lat / divisor,
                    self.prev_lon + d_lon / divisor,
                ));
                continue;
            }

            self.err_lat = d_lat - round_lat;
            self.err_lon = d_lon - round_lon;
            self.prev_lat = p_lat;
            self.prev_lon = p_lon;
            pending.pop();
        }
    }

    /// Append one delta byte, or merge it into the previous one.
    ///
    /// With `optimize` set and at least one delta already in the buffer, the
    /// previous and current delta are combined when their sum still fits a
    /// nibble pair and the previous delta's endpoint sits within half a
    /// quantization unit of the combined straight line.
    fn write_delta(&mut self, d_lat: i8, d_lon: i8, optimize: bool, synthesized: bool) {
        if optimize && self.buf.len() > HEADER_SIZE {
            let last = self.buf.len() - 1;
            let (prev_lat, prev_lon) = unpack_delta(self.buf[last]);
            let sum_lat = prev_lat + i32::from(d_lat);
            let sum_lon = prev_lon + i32::from(d_lon);
            if sum_lat.abs() <= 7 && sum_lon.abs() <= 7 {
                // Perpendicular distance of the previous endpoint from the
                // combined delta. A zero combined delta yields NaN and is
                // never merged.
                let cross = f64::from(-sum_lat * prev_lon + prev_lat * sum_lon).abs();
                let norm = f64::from(sum_lat * sum_lat + sum_lon * sum_lon).sqrt();
                if cross / norm < 0.5 {
                    self.buf[last] = pack_delta(sum_lat, sum_lon);
                    self.stats.removed += 1;
                    return;
                }
            }
        }

        self.buf.push(pack_delta(i32::from(d_lat), i32::from(d_lon)));
        if synthesized {
            self.stats.added += 1;
        } else {
            self.stats.kept += 1;
        }
    }

    /// Write the 8-byte header: length, factor code, then the initial
    /// position as signed 24-bit scaled integers, big-endian.
    ///
    /// Idempotent; re-invoked after encoding to fix up the length byte.
    fn write_header(&mut self, lat: i32, lon: i32, factor: u8) {
        if self.buf.len() < HEADER_SIZE {
            self.buf.resize(HEADER_SIZE, 0);
        }
        self.buf[0] = self.buf.len() as u8;
        self.buf[1] = factor;
        self.buf[2] = (lat >> 16) as u8;
        self.buf[3] = (lat >> 8) as u8;
        self.buf[4] = lat as u8;
        self.buf[5] = (lon >> 16) as u8;
        self.buf[6] = (lon >> 8) as u8;
        self.buf[7] = lon as u8;
    }
}
