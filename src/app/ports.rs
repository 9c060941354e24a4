//! Port traits — the hexagonal boundary between the loop and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ HelmetService (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, serial links, clock, event sinks)
//! implement these traits. The [`HelmetService`](super::service::HelmetService)
//! consumes them via generics, so the loop never touches hardware directly.
//!
//! None of the read ports return `Result`. A fault is expressed through the
//! value the adapter hands back (NaN, `None`), and the service substitutes
//! its fixed fallback.

use crate::error::Error;

use super::state::ActuatorState;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// One temperature/humidity measurement. Either field is NaN on fault.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateReading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

impl ClimateReading {
    /// Both fields NaN: the sensor did not answer.
    pub const FAULT: Self = Self {
        temperature_c: f32::NAN,
        humidity_pct: f32::NAN,
    };
}

/// Read-side port: the domain calls this to obtain raw sensor data.
pub trait SensorPort {
    /// One analog sample from the gas sensor, native ADC range.
    fn read_gas_raw(&mut self) -> u16;

    /// One temperature/humidity measurement.
    fn read_climate(&mut self) -> ClimateReading;

    /// `true` when the panic-button line is electrically low.
    fn panic_line_low(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the alert outputs.
pub trait ActuatorPort {
    /// Drive light and motor to `state` immediately.
    fn apply_alert(&mut self, state: ActuatorState);
}

// ───────────────────────────────────────────────────────────────
// Serial ports
// ───────────────────────────────────────────────────────────────

/// Inbound host command channel.
pub trait CommandPort {
    /// Take one pending byte, if any. Must not block.
    fn poll_command_byte(&mut self) -> Option<u8>;
}

/// Byte stream from the positioning receiver.
pub trait GpsStreamPort {
    /// Take one pending byte, if any. Must not block.
    fn poll_gps_byte(&mut self) -> Option<u8>;
}

/// Outbound host report channel.
pub trait ReportPort {
    /// Transmit one line. The adapter appends the line terminator.
    fn send_line(&mut self, line: &str) -> Result<(), Error>;
}

// ───────────────────────────────────────────────────────────────
// Time port
// ───────────────────────────────────────────────────────────────

/// Monotonic clock and blocking delay.
pub trait TimePort {
    /// Milliseconds since boot.
    fn uptime_ms(&self) -> u64;

    /// Block the calling task for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
