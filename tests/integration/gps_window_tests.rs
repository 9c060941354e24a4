//! Integration tests for the GPS acquisition window: fixes arriving
//! mid-stream, fix retention, fallback coordinates and corrupt input.

use crate::mock_hw::{FakeClock, MockBoard, MockGps, MockLink, RecordingSink};

use helmet::app::events::AppEvent;
use helmet::app::report::StatusReport;
use helmet::app::service::HelmetService;
use helmet::config::{FALLBACK_LATITUDE, FALLBACK_LONGITUDE, HelmetConfig};

const RMC_MUNICH: &str = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
const GGA_MUNICH: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
const RMC_VOID: &str = "$GPRMC,,V,,,,,,,,,,N*53";

struct Rig {
    app: HelmetService,
    board: MockBoard,
    link: MockLink,
    gps: MockGps,
    clock: FakeClock,
    sink: RecordingSink,
}

impl Rig {
    fn new() -> Self {
        Self {
            app: HelmetService::new(HelmetConfig::default()),
            board: MockBoard::new(),
            link: MockLink::new(),
            gps: MockGps::new(),
            clock: FakeClock::new(),
            sink: RecordingSink::new(),
        }
    }

    fn cycle(&mut self) -> StatusReport {
        self.app.run_cycle(
            &mut self.board,
            &mut self.link,
            &mut self.gps,
            &mut self.clock,
            &mut self.sink,
        )
    }
}

fn fix_events(sink: &RecordingSink) -> usize {
    sink.count(|e| matches!(e, AppEvent::GpsFixAcquired { .. }))
}

#[test]
fn fix_in_window_is_reported() {
    let mut rig = Rig::new();
    rig.gps.push_sentence(RMC_MUNICH);
    rig.cycle();

    let line = rig.link.last_report().unwrap();
    assert!(line.contains("\"latitude\":48.117300"), "{line}");
    assert!(line.contains("\"longitude\":11.516667"), "{line}");
    assert!(rig.app.gps().has_fix());
}

#[test]
fn gga_fix_updates_satellites() {
    let mut rig = Rig::new();
    rig.gps.push_sentence(GGA_MUNICH);
    let report = rig.cycle();
    assert!((report.latitude - 48.1173).abs() < 1e-9);
    assert_eq!(rig.app.gps().satellites(), 8);
}

#[test]
fn no_stream_uses_fallback() {
    let mut rig = Rig::new();
    let report = rig.cycle();
    assert_eq!(report.latitude, FALLBACK_LATITUDE);
    assert_eq!(report.longitude, FALLBACK_LONGITUDE);
    assert_eq!(fix_events(&rig.sink), 0);
}

#[test]
fn void_fix_uses_fallback() {
    let mut rig = Rig::new();
    rig.gps.push_sentence(RMC_VOID);
    let report = rig.cycle();
    assert_eq!(report.latitude, FALLBACK_LATITUDE);
    assert_eq!(rig.app.gps().passed_checksums(), 1);
}

#[test]
fn corrupt_sentence_uses_fallback() {
    let mut rig = Rig::new();
    rig.gps.push_sentence(&RMC_MUNICH.replace("*6A", "*00"));
    let report = rig.cycle();
    assert_eq!(report.longitude, FALLBACK_LONGITUDE);
    assert_eq!(rig.app.gps().failed_checksums(), 1);
}

#[test]
fn fix_is_kept_when_stream_goes_quiet() {
    let mut rig = Rig::new();
    rig.gps.push_sentence(RMC_MUNICH);
    rig.cycle();
    let later = rig.cycle();
    let latest = rig.cycle();

    assert!((later.latitude - 48.1173).abs() < 1e-9);
    assert!((latest.longitude - 11.516_666_7).abs() < 1e-6);
    assert_eq!(fix_events(&rig.sink), 1);
}

#[test]
fn later_void_sentence_keeps_previous_fix() {
    let mut rig = Rig::new();
    rig.gps.push_sentence(RMC_MUNICH);
    rig.cycle();
    rig.gps.push_sentence(RMC_VOID);
    let report = rig.cycle();
    assert!((report.latitude - 48.1173).abs() < 1e-9);
}

#[test]
fn sentence_split_across_windows_completes_next_cycle() {
    let mut rig = Rig::new();
    // One window drains 499 bytes with the fake clock; the sentence
    // straddles the boundary.
    rig.gps.bytes.extend(std::iter::repeat_n(b'x', 480));
    rig.gps.push_sentence(RMC_MUNICH);

    let first = rig.cycle();
    assert_eq!(first.latitude, FALLBACK_LATITUDE);
    assert!(!rig.gps.bytes.is_empty());

    let second = rig.cycle();
    assert!((second.latitude - 48.1173).abs() < 1e-9);
}

#[test]
fn window_only_consumes_what_time_allows() {
    let mut rig = Rig::new();
    rig.gps.bytes.extend(std::iter::repeat_n(b'x', 2000));
    rig.cycle();
    assert_eq!(rig.gps.bytes.len(), 2000 - 499);
}
