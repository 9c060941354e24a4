//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the ESP-IDF
//! logger. Log lines share UART0 with the status reports; hosts keep
//! only lines that parse as JSON objects, so the two never collide.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                info!("START | alert={}", on_off(state.is_on()));
            }
            AppEvent::AlertChanged { from, to } => {
                info!(
                    "ALERT | {} -> {}",
                    on_off(from.is_on()),
                    on_off(to.is_on())
                );
            }
            AppEvent::CommandIgnored(byte) => {
                info!("CMD   | ignored byte 0x{:02x}", byte);
            }
            AppEvent::GpsFixAcquired {
                latitude,
                longitude,
            } => {
                info!("GPS   | fix at {:.6},{:.6}", latitude, longitude);
            }
            AppEvent::ClimateFault {
                temperature,
                humidity,
            } => {
                warn!(
                    "DHT   | no reading (temperature={} humidity={}), reporting 0",
                    if *temperature { "NaN" } else { "ok" },
                    if *humidity { "NaN" } else { "ok" },
                );
            }
            AppEvent::ReportFailed(e) => {
                warn!("REPORT| dropped: {}", e);
            }
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}
