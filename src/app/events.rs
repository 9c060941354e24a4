//! Outbound diagnostic events.
//!
//! The [`HelmetService`](super::service::HelmetService) emits these through
//! the [`EventSink`](super::ports::EventSink) port. They are for the
//! operator's log, never for the host controller, which only sees
//! [`StatusReport`](super::report::StatusReport) lines.

use crate::error::Error;

use super::state::ActuatorState;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service applied its initial actuator state.
    Started(ActuatorState),

    /// A command byte changed the alert outputs.
    AlertChanged { from: ActuatorState, to: ActuatorState },

    /// An inbound byte was not a known command.
    CommandIgnored(u8),

    /// The GPS decoder reported a valid fix for the first time.
    GpsFixAcquired { latitude: f64, longitude: f64 },

    /// The climate sensor returned NaN; the flagged fields were zeroed.
    ClimateFault { temperature: bool, humidity: bool },

    /// The report line could not be sent.
    ReportFailed(Error),
}
