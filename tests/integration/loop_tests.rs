//! Integration tests for the sensor-report loop: command intake, sensor
//! fallbacks, panic snapshot, report emission and pacing.

use crate::mock_hw::{FakeClock, MockBoard, MockGps, MockLink, RecordingSink};

use helmet::app::events::AppEvent;
use helmet::app::ports::ClimateReading;
use helmet::app::report::StatusReport;
use helmet::app::service::{BANNER, HelmetService};
use helmet::app::state::ActuatorState;
use helmet::config::HelmetConfig;
use helmet::error::{CommsError, Error};

struct Rig {
    app: HelmetService,
    board: MockBoard,
    link: MockLink,
    gps: MockGps,
    clock: FakeClock,
    sink: RecordingSink,
}

impl Rig {
    fn started() -> Self {
        let mut rig = Self {
            app: HelmetService::new(HelmetConfig::default()),
            board: MockBoard::new(),
            link: MockLink::new(),
            gps: MockGps::new(),
            clock: FakeClock::new(),
            sink: RecordingSink::new(),
        };
        rig.app.start(&mut rig.board, &mut rig.link, &mut rig.sink);
        rig
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

// ── Start-up ──────────────────────────────────────────────────

#[test]
fn start_forces_alert_off_and_sends_banner() {
    let rig = Rig::started();
    assert_eq!(rig.board.applied, vec![ActuatorState::OFF]);
    assert_eq!(rig.link.lines, vec![BANNER.to_owned()]);
    assert_eq!(rig.sink.events, vec![AppEvent::Started(ActuatorState::OFF)]);
}

#[test]
fn banner_is_not_a_report() {
    assert!(StatusReport::parse_line(BANNER).is_err());
}

// ── End-to-end report ─────────────────────────────────────────

#[test]
fn first_cycle_without_fix_reports_fallback_position() {
    let mut rig = Rig::started();
    rig.cycle();

    assert_eq!(
        rig.link.last_report(),
        Some(
            "{\"helmetId\":\"SH-001\",\"gas\":512.00,\"methane\":512.00,\
             \"natural_gas\":512.00,\"temperature\":25.30,\"humidity\":60.00,\
             \"latitude\":23.662260,\"longitude\":86.472677,\"battery\":100,\
             \"emergency\":false}"
        )
    );
}

#[test]
fn one_report_per_cycle() {
    let mut rig = Rig::started();
    for _ in 0..4 {
        rig.cycle();
    }
    assert_eq!(rig.link.reports().len(), 4);
    assert_eq!(rig.app.cycle_count(), 4);
}

#[test]
fn returned_report_matches_transmitted_line() {
    let mut rig = Rig::started();
    let report = rig.cycle();
    let parsed = StatusReport::parse_line(rig.link.last_report().unwrap()).unwrap();
    assert_eq!(parsed.helmet_id, report.helmet_id);
    assert_eq!(parsed.gas, report.gas);
    assert_eq!(parsed.battery, 100);
    assert!(!parsed.emergency);
}

#[test]
fn gas_channels_follow_raw_reading() {
    let mut rig = Rig::started();
    rig.board.gas_raw = 1234;
    let report = rig.cycle();
    assert_eq!(report.gas, 1234.0);
    assert_eq!(report.methane, 1234.0);
    assert_eq!(report.natural_gas, 1234.0);
}

// ── Command intake ────────────────────────────────────────────

#[test]
fn alert_on_persists_until_off() {
    let mut rig = Rig::started();
    rig.link.push_commands(b"1");
    rig.cycle();
    assert_eq!(rig.board.outputs(), ActuatorState::ON);

    // No further bytes: nothing reapplied, state held.
    rig.cycle();
    rig.cycle();
    assert_eq!(rig.board.outputs(), ActuatorState::ON);
    assert_eq!(rig.board.applied, vec![ActuatorState::OFF, ActuatorState::ON]);

    rig.link.push_commands(b"0");
    rig.cycle();
    assert_eq!(rig.board.outputs(), ActuatorState::OFF);
    assert_eq!(rig.app.alert_state(), ActuatorState::OFF);
}

#[test]
fn at_most_one_command_byte_per_cycle() {
    let mut rig = Rig::started();
    rig.link.push_commands(b"10");

    rig.cycle();
    assert_eq!(rig.app.alert_state(), ActuatorState::ON);
    assert_eq!(rig.link.inbound.len(), 1);

    rig.cycle();
    assert_eq!(rig.app.alert_state(), ActuatorState::OFF);
    assert!(rig.link.inbound.is_empty());
}

#[test]
fn unknown_bytes_are_ignored_one_per_cycle() {
    let mut rig = Rig::started();
    rig.link.push_commands(b"\n1");

    rig.cycle();
    assert_eq!(rig.app.alert_state(), ActuatorState::OFF);
    assert_eq!(rig.sink.count(|e| *e == AppEvent::CommandIgnored(b'\n')), 1);

    rig.cycle();
    assert_eq!(rig.app.alert_state(), ActuatorState::ON);
}

#[test]
fn alert_change_is_announced_once() {
    let mut rig = Rig::started();
    rig.link.push_commands(b"11");
    rig.cycle();
    rig.cycle();
    let changes = rig
        .sink
        .count(|e| matches!(e, AppEvent::AlertChanged { .. }));
    assert_eq!(changes, 1);
    // The repeat is still written to the outputs.
    assert_eq!(
        rig.board.applied,
        vec![ActuatorState::OFF, ActuatorState::ON, ActuatorState::ON]
    );
}

// ── Sensor fallbacks ──────────────────────────────────────────

#[test]
fn missing_climate_reading_reports_zero() {
    let mut rig = Rig::started();
    rig.board.climate = ClimateReading::FAULT;
    rig.cycle();

    let line = rig.link.last_report().unwrap();
    assert!(line.contains("\"temperature\":0.00"));
    assert!(line.contains("\"humidity\":0.00"));
    assert_eq!(
        rig.sink.count(|e| *e
            == AppEvent::ClimateFault {
                temperature: true,
                humidity: true
            }),
        1
    );
}

#[test]
fn one_nan_field_only_zeroes_that_field() {
    let mut rig = Rig::started();
    rig.board.climate = ClimateReading {
        temperature_c: 21.0,
        humidity_pct: f32::NAN,
    };
    let report = rig.cycle();
    assert_eq!(report.temperature, 21.0);
    assert_eq!(report.humidity, 0.0);
}

#[test]
fn climate_is_read_once_per_cycle() {
    let mut rig = Rig::started();
    rig.cycle();
    rig.cycle();
    assert_eq!(rig.board.climate_reads, 2);
}

// ── Panic button ──────────────────────────────────────────────

#[test]
fn emergency_mirrors_button_each_cycle() {
    let mut rig = Rig::started();
    rig.board.button_pressed = true;
    assert!(rig.cycle().emergency);
    assert!(rig.link.last_report().unwrap().ends_with("\"emergency\":true}"));

    rig.board.button_pressed = false;
    assert!(!rig.cycle().emergency);
}

#[test]
fn emergency_does_not_touch_alert_outputs() {
    let mut rig = Rig::started();
    rig.board.button_pressed = true;
    rig.cycle();
    assert_eq!(rig.board.applied, vec![ActuatorState::OFF]);
}

// ── Emission failures and pacing ──────────────────────────────

#[test]
fn failed_write_is_reported_and_loop_continues() {
    let mut rig = Rig::started();
    rig.link.fail_writes = true;
    rig.cycle();
    rig.cycle();

    assert_eq!(
        rig.sink.count(|e| *e == AppEvent::ReportFailed(Error::Comms(CommsError::UartWriteFailed))),
        2
    );
    assert_eq!(rig.clock.delays, vec![500, 500]);

    rig.link.fail_writes = false;
    rig.cycle();
    assert_eq!(rig.link.reports().len(), 1);
}

#[test]
fn cycle_ends_with_configured_delay() {
    let mut rig = Rig::started();
    rig.cycle();
    assert_eq!(rig.clock.delays, vec![500]);
    // Window plus delay, give or take one clock tick.
    let elapsed = rig.clock.now();
    assert!((1000..=1002).contains(&elapsed), "elapsed {elapsed}");
}

#[test]
fn custom_timing_is_honoured() {
    let config = HelmetConfig {
        acquisition_window_ms: 50,
        cycle_delay_ms: 20,
        ..HelmetConfig::default()
    };
    let mut app = HelmetService::new(config);
    let mut board = MockBoard::new();
    let mut link = MockLink::new();
    let mut gps = MockGps::new();
    let mut clock = FakeClock::new();
    let mut sink = RecordingSink::new();

    app.start(&mut board, &mut link, &mut sink);
    app.run_cycle(&mut board, &mut link, &mut gps, &mut clock, &mut sink);

    assert_eq!(clock.delays, vec![20]);
    assert!((70..=72).contains(&clock.now()));
}
