//! Fuzz target: `StatusReport::parse_line`
//!
//! Feeds arbitrary text to the host-side report parser. Anything it
//! accepts must encode again to a single line that parses back to the
//! same report.
//!
//! cargo fuzz run fuzz_report_line

#![no_main]

use helmet::app::report::StatusReport;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let Ok(report) = StatusReport::parse_line(text) else {
        return;
    };

    let line = report.to_line().expect("accepted report must encode");
    assert!(!line.contains('\n'));
    let again = StatusReport::parse_line(&line).expect("encoded report must parse");
    assert_eq!(again.helmet_id, report.helmet_id);
    assert_eq!(again.battery, report.battery);
    assert_eq!(again.emergency, report.emergency);
});
