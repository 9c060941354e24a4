//! Fuzz target: `GpsDecoder::encode`
//!
//! Drives arbitrary byte streams through the NMEA decoder and checks:
//! - No panics under any byte sequence
//! - Any committed fix lies inside the valid coordinate range
//! - Counters only ever grow
//!
//! cargo fuzz run fuzz_nmea_decoder

#![no_main]

use helmet::gps::GpsDecoder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = GpsDecoder::new();
    let mut passed = 0;
    let mut failed = 0;

    for &b in data {
        decoder.encode(b);
        assert!(decoder.passed_checksums() >= passed);
        assert!(decoder.failed_checksums() >= failed);
        passed = decoder.passed_checksums();
        failed = decoder.failed_checksums();
    }

    if let Some(fix) = decoder.location() {
        assert!((-90.0..=90.0).contains(&fix.latitude));
        assert!((-180.0..=180.0).contains(&fix.longitude));
    }
});
