//! Mock adapters for integration tests.
//!
//! Records every actuator call and every transmitted line so tests can
//! assert on the full history without touching UARTs or GPIO registers.
//! The clock is virtual: each uptime query advances it by one tick, so
//! the GPS acquisition window always terminates.

use std::cell::Cell;
use std::collections::VecDeque;

use helmet::app::events::AppEvent;
use helmet::app::ports::{
    ActuatorPort, ClimateReading, CommandPort, EventSink, GpsStreamPort, ReportPort, SensorPort,
    TimePort,
};
use helmet::app::state::ActuatorState;
use helmet::error::{CommsError, Error};

// ── MockBoard ─────────────────────────────────────────────────

pub struct MockBoard {
    pub gas_raw: u16,
    pub climate: ClimateReading,
    pub button_pressed: bool,
    /// Every `apply_alert` call, in order.
    pub applied: Vec<ActuatorState>,
    pub climate_reads: u32,
}

#[allow(dead_code)]
impl MockBoard {
    pub fn new() -> Self {
        Self {
            gas_raw: 512,
            climate: ClimateReading {
                temperature_c: 25.3,
                humidity_pct: 60.0,
            },
            button_pressed: false,
            applied: Vec::new(),
            climate_reads: 0,
        }
    }

    /// Output state after the last write, `OFF` if never written.
    pub fn outputs(&self) -> ActuatorState {
        self.applied.last().copied().unwrap_or_default()
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockBoard {
    fn read_gas_raw(&mut self) -> u16 {
        self.gas_raw
    }

    fn read_climate(&mut self) -> ClimateReading {
        self.climate_reads += 1;
        self.climate
    }

    fn panic_line_low(&mut self) -> bool {
        self.button_pressed
    }
}

impl ActuatorPort for MockBoard {
    fn apply_alert(&mut self, state: ActuatorState) {
        self.applied.push(state);
    }
}

// ── MockLink ──────────────────────────────────────────────────

/// Host link: queued inbound bytes and captured outbound lines.
pub struct MockLink {
    pub inbound: VecDeque<u8>,
    pub lines: Vec<String>,
    pub fail_writes: bool,
}

#[allow(dead_code)]
impl MockLink {
    pub fn new() -> Self {
        Self {
            inbound: VecDeque::new(),
            lines: Vec::new(),
            fail_writes: false,
        }
    }

    pub fn push_commands(&mut self, bytes: &[u8]) {
        self.inbound.extend(bytes.iter().copied());
    }

    /// Lines that look like reports (JSON objects).
    pub fn reports(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|l| l.starts_with('{'))
            .collect()
    }

    pub fn last_report(&self) -> Option<&str> {
        self.reports().last().copied()
    }
}

impl Default for MockLink {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandPort for MockLink {
    fn poll_command_byte(&mut self) -> Option<u8> {
        self.inbound.pop_front()
    }
}

impl ReportPort for MockLink {
    fn send_line(&mut self, line: &str) -> Result<(), Error> {
        if self.fail_writes {
            return Err(CommsError::UartWriteFailed.into());
        }
        self.lines.push(line.to_owned());
        Ok(())
    }
}

// ── MockGps ───────────────────────────────────────────────────

#[derive(Default)]
pub struct MockGps {
    pub bytes: VecDeque<u8>,
}

#[allow(dead_code)]
impl MockGps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one complete sentence, `$` through CRLF.
    pub fn push_sentence(&mut self, sentence: &str) {
        self.bytes.extend(sentence.bytes());
        self.bytes.extend(*b"\r\n");
    }
}

impl GpsStreamPort for MockGps {
    fn poll_gps_byte(&mut self) -> Option<u8> {
        self.bytes.pop_front()
    }
}

// ── FakeClock ─────────────────────────────────────────────────

pub struct FakeClock {
    now_ms: Cell<u64>,
    /// Advance per `uptime_ms` query.
    pub tick_ms: u64,
    pub delays: Vec<u32>,
}

#[allow(dead_code)]
impl FakeClock {
    pub fn new() -> Self {
        Self {
            now_ms: Cell::new(0),
            tick_ms: 1,
            delays: Vec::new(),
        }
    }

    pub fn now(&self) -> u64 {
        self.now_ms.get()
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimePort for FakeClock {
    fn uptime_ms(&self) -> u64 {
        let now = self.now_ms.get();
        self.now_ms.set(now + self.tick_ms);
        now
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
        self.now_ms.set(self.now_ms.get() + u64::from(ms));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
