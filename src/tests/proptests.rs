use proptest::prelude::*;

use crate::precision::scale_of;
use crate::{decode, Coordinate, Encoder, Simplification};

/// Output bound large enough that generated tracks never truncate
const ROOMY_MAX: usize = 255;

prop_compose! {
    /// A track as a start position plus bounded per-point motion.
    ///
    /// Steps up to 0.0008 degrees occasionally overflow the nibble range at
    /// the finest precision, so overflow recovery gets exercised alongside
    /// ordinary deltas and zero-delta drops.
    fn arb_track()(
        lat0 in -80.0f64..80.0,
        lon0 in -170.0f64..170.0,
        steps in prop::collection::vec((-0.0008f64..0.0008, -0.0008f64..0.0008), 1..60),
    ) -> Vec<Coordinate> {
        let mut lat = lat0;
        let mut lon = lon0;
        let mut track = vec![Coordinate::new(lat, lon)];
        for (d_lat, d_lon) in steps {
            lat += d_lat;
            lon += d_lon;
            track.push(Coordinate::new(lat, lon));
        }
        track
    }
}

fn arb_factor() -> impl Strategy<Value = u8> {
    prop_oneof![Just(227u8), Just(1u8), Just(5u8), Just(230u8)]
}

fn arb_mode() -> impl Strategy<Value = Simplification> {
    prop_oneof![
        Just(Simplification::None),
        Just(Simplification::PerpendicularDistance),
        Just(Simplification::DouglasPeucker),
    ]
}

proptest! {
    /// Property: the buffer is self-describing and within the size bound
    #[test]
    fn prop_buffer_invariants(track in arb_track(), factor in arb_factor(), mode in arb_mode()) {
        let mut enc = Encoder::new(ROOMY_MAX);
        let buf = enc.encode(&track, factor, mode);
        prop_assert!(!buf.is_empty());
        prop_assert!(buf.len() <= ROOMY_MAX);
        prop_assert_eq!(buf[0] as usize, buf.len());
        prop_assert_eq!(buf[1], factor);
    }

    /// Property: encoding the same track twice gives identical bytes
    #[test]
    fn prop_encode_deterministic(track in arb_track(), factor in arb_factor(), mode in arb_mode()) {
        let mut enc = Encoder::new(ROOMY_MAX);
        let first = enc.encode(&track, factor, mode);
        let second = enc.encode(&track, factor, mode);
        prop_assert_eq!(first, second);
    }

    /// Property: the first decoded point is within half a quantization step
    /// of the first input point (header rounding only)
    #[test]
    fn prop_first_point_tolerance(track in arb_track(), factor in arb_factor(), mode in arb_mode()) {
        let step = scale_of(factor) / 10000.0;
        let mut enc = Encoder::new(ROOMY_MAX);
        let buf = enc.encode(&track, factor, mode);
        let decoded = decode(&buf);
        prop_assert!(!decoded.is_empty());
        prop_assert!((decoded[0].lat - track[0].lat).abs() <= 0.55 * step);
        prop_assert!((decoded[0].lon - track[0].lon).abs() <= 0.55 * step);
    }

    /// Property: the last decoded point is within half a quantization step of
    /// the last input point in every mode. Drops carry their error forward,
    /// the online merge preserves delta sums and Douglas-Peucker preserves
    /// endpoints, so no interleaving of the three may lose the track's end.
    #[test]
    fn prop_endpoint_tolerance(track in arb_track(), factor in arb_factor(), mode in arb_mode()) {
        let step = scale_of(factor) / 10000.0;
        let mut enc = Encoder::new(ROOMY_MAX);
        let buf = enc.encode(&track, factor, mode);
        prop_assert!(buf.len() < ROOMY_MAX, "generated track must not truncate");

        let decoded = decode(&buf);
        prop_assert!(!decoded.is_empty());
        let last_in = track[track.len() - 1];
        let last_out = decoded[decoded.len() - 1];
        prop_assert!(
            (last_out.lat - last_in.lat).abs() <= 0.55 * step,
            "lat endpoint drift {} exceeds step {}", (last_out.lat - last_in.lat).abs(), step
        );
        prop_assert!(
            (last_out.lon - last_in.lon).abs() <= 0.55 * step,
            "lon endpoint drift {} exceeds step {}", (last_out.lon - last_in.lon).abs(), step
        );
    }

    /// Property: without simplification every decoded point tracks its input
    /// point within the quantization step, and no point is gained or lost
    /// when all deltas are representable
    #[test]
    fn prop_pointwise_tolerance_plain(
        lat0 in -80.0f64..80.0,
        lon0 in -170.0f64..170.0,
        steps in prop::collection::vec((1i32..=7, 1i32..=7), 1..40),
    ) {
        // Steps in whole quantization units: nothing rounds to zero and
        // nothing overflows, so the mapping is one-to-one
        let step = 0.0001;
        let mut lat = lat0;
        let mut lon = lon0;
        let mut track = vec![Coordinate::new(lat, lon)];
        for (d_lat, d_lon) in steps {
            lat += f64::from(d_lat) * step;
            lon += f64::from(d_lon) * step;
            track.push(Coordinate::new(lat, lon));
        }

        let mut enc = Encoder::new(ROOMY_MAX);
        let buf = enc.encode(&track, 227, Simplification::None);
        let decoded = decode(&buf);
        prop_assert_eq!(decoded.len(), track.len());
        for (original, roundtripped) in track.iter().zip(&decoded) {
            prop_assert!((original.lat - roundtripped.lat).abs() <= 0.55 * step);
            prop_assert!((original.lon - roundtripped.lon).abs() <= 0.55 * step);
        }
    }

    /// Property: decoded steps never exceed the nibble range
    #[test]
    fn prop_decoded_deltas_bounded(track in arb_track(), factor in arb_factor(), mode in arb_mode()) {
        let step = scale_of(factor) / 10000.0;
        let mut enc = Encoder::new(ROOMY_MAX);
        let buf = enc.encode(&track, factor, mode);
        let decoded = decode(&buf);
        for pair in decoded.windows(2) {
            prop_assert!((pair[1].lat - pair[0].lat).abs() <= 7.0 * step + 1e-9);
            prop_assert!((pair[1].lon - pair[0].lon).abs() <= 7.0 * step + 1e-9);
        }
    }

    /// Property: reserved factor codes always produce empty results
    #[test]
    fn prop_reserved_codes_reject(track in arb_track(), code in prop_oneof![
        Just(0u8), 200u8..=226, 240u8..=255,
    ]) {
        let mut enc = Encoder::new(ROOMY_MAX);
        prop_assert!(enc.encode(&track, code, Simplification::None).is_empty());

        let mut buf = vec![8u8, code, 0, 0, 0, 0, 0, 0];
        prop_assert!(decode(&buf).is_empty());
        buf.push(0x11);
        prop_assert!(decode(&buf).is_empty());
    }

    /// Property: decode never panics on arbitrary bytes and yields exactly
    /// one point per delta byte when the header is valid
    #[test]
    fn prop_decode_arbitrary_bytes(data in prop::collection::vec(any::<u8>(), 0..300)) {
        let decoded = decode(&data);
        if data.len() >= 8 && scale_of(data[1]) != 0.0 {
            prop_assert_eq!(decoded.len(), data.len() - 7);
        } else {
            prop_assert!(decoded.is_empty());
        }
    }

    /// Property: encode never panics, even for hostile coordinates; any
    /// non-empty result is still a well-formed buffer
    #[test]
    fn prop_encode_hostile_coords(
        points in prop::collection::vec((any::<f64>(), any::<f64>()), 0..20),
        factor in arb_factor(),
        mode in arb_mode(),
    ) {
        let track: Vec<Coordinate> = points.into_iter().map(Coordinate::from).collect();
        let mut enc = Encoder::new(64);
        let buf = enc.encode(&track, factor, mode);
        if !buf.is_empty() {
            prop_assert!(buf.len() >= 8);
            prop_assert!(buf.len() <= 64);
            prop_assert_eq!(buf[0] as usize, buf.len());
        }
    }
}
