#![no_main]

use libfuzzer_sys::fuzz_target;
use tracknib::decode;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the decoder. Undersized buffers and
    // reserved factor codes come back empty, everything else yields exactly
    // one coordinate per delta byte.
    let coords = decode(data);
    if data.len() >= 8 && !coords.is_empty() {
        assert_eq!(coords.len(), data.len() - 7);
    }
});
