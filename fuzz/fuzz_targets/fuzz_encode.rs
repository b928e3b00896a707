#![no_main]

use libfuzzer_sys::fuzz_target;
use tracknib::{Coordinate, Encoder, Simplification};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte picks the factor code (including reserved ones), second the
    // simplification mode; the rest becomes raw coordinate bits, so NaN,
    // infinities and out-of-range positions all reach the encoder.
    let factor = data[0];
    let mode = match data[1] % 3 {
        0 => Simplification::None,
        1 => Simplification::PerpendicularDistance,
        _ => Simplification::DouglasPeucker,
    };

    let mut track = Vec::new();
    for chunk in data[2..].chunks_exact(16) {
        let lat = f64::from_le_bytes(chunk[..8].try_into().unwrap());
        let lon = f64::from_le_bytes(chunk[8..].try_into().unwrap());
        track.push(Coordinate::new(lat, lon));
    }

    let mut enc = Encoder::new(128);
    let buf = enc.encode(&track, factor, mode);

    // Any non-empty result must be a well-formed, self-describing buffer
    if !buf.is_empty() {
        assert!(buf.len() >= 8);
        assert!(buf.len() <= 128);
        assert_eq!(buf[0] as usize, buf.len());
        assert_eq!(buf[1], factor);
    }
});
