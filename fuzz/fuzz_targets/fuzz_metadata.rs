#![no_main]

use exposure_wire::AssociatedMetadata;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz raw decoding - test for panics on arbitrary input
    if let Ok(am) = AssociatedMetadata::from_bytes(data) {
        // lenient decode must round-trip byte-exactly
        assert_eq!(am.to_bytes().as_slice(), data);
        let _ = am.version();
        let _ = am.transmit_power_level();
    }
});
