#![no_main]

use libfuzzer_sys::fuzz_target;
use tracknib::{decode, Coordinate, Encoder, Simplification};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Bytes become signed per-point motion in tenths of a quantization unit,
    // producing realistic in-range tracks with drops, merges and overflows.
    let mode = match data[0] % 3 {
        0 => Simplification::None,
        1 => Simplification::PerpendicularDistance,
        _ => Simplification::DouglasPeucker,
    };

    let mut lat = 45.0;
    let mut lon = 9.0;
    let mut track = vec![Coordinate::new(lat, lon)];
    for chunk in data[1..].chunks_exact(2) {
        lat += f64::from(chunk[0] as i8) * 0.00001;
        lon += f64::from(chunk[1] as i8) * 0.00001;
        // Keep the track in range so early termination never fires and the
        // endpoint property below holds unconditionally
        if lat.abs() > 89.0 || lon.abs() > 179.0 {
            break;
        }
        track.push(Coordinate::new(lat, lon));
    }
    if track.len() < 2 {
        return;
    }

    let mut enc = Encoder::new(255);
    let buf = enc.encode(&track, 227, mode);
    assert_eq!(buf[0] as usize, buf.len());

    let decoded = decode(&buf);
    assert!(!decoded.is_empty());

    // Drops carry error forward, merges preserve delta sums and
    // Douglas-Peucker preserves endpoints: without truncation the decoded
    // endpoint stays within half a step of the input endpoint.
    if buf.len() < 255 {
        let last_in = track[track.len() - 1];
        let last_out = decoded[decoded.len() - 1];
        assert!((last_out.lat - last_in.lat).abs() <= 0.000055);
        assert!((last_out.lon - last_in.lon).abs() <= 0.000055);
    }
});
