//! System configuration parameters
//!
//! All tunable parameters for the safety helmet.
//! Values are compiled in; the helmet keeps no persistent storage.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Fixed-size helmet identifier carried in every status report.
pub type HelmetId = heapless::String<16>;

/// Fallback position reported while no GPS fix has ever been decoded.
pub const FALLBACK_LATITUDE: f64 = 23.662_259_8;
pub const FALLBACK_LONGITUDE: f64 = 86.472_676_5;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelmetConfig {
    // --- Identity ---
    /// Device identifier emitted as `helmetId`
    pub helmet_id: HelmetId,

    // --- Timing ---
    /// GPS acquisition window per cycle (milliseconds)
    pub acquisition_window_ms: u32,
    /// Fixed sleep after each report (milliseconds)
    pub cycle_delay_ms: u32,

    // --- Position ---
    /// Latitude reported until the first fix (degrees)
    pub fallback_latitude: f64,
    /// Longitude reported until the first fix (degrees)
    pub fallback_longitude: f64,

    // --- Battery ---
    /// Constant battery level. Not measured.
    pub battery_percent: u8,

    // --- Serial links ---
    /// Command/report UART baud rate
    pub report_baud: u32,
    /// GPS receiver UART baud rate
    pub gps_baud: u32,
}

impl Default for HelmetConfig {
    fn default() -> Self {
        let mut helmet_id = HelmetId::new();
        // "SH-001" always fits the 16-byte buffer.
        let _ = helmet_id.push_str("SH-001");

        Self {
            helmet_id,

            // Timing
            acquisition_window_ms: 500,
            cycle_delay_ms: 500,

            // Position
            fallback_latitude: FALLBACK_LATITUDE,
            fallback_longitude: FALLBACK_LONGITUDE,

            // Battery
            battery_percent: 100,

            // Serial links
            report_baud: 115_200,
            gps_baud: 9_600,
        }
    }
}

impl HelmetConfig {
    /// Reject values the loop cannot run with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.helmet_id.is_empty() {
            return Err(Error::Config("helmet_id must not be empty"));
        }
        if self.acquisition_window_ms == 0 {
            return Err(Error::Config("acquisition_window_ms must be > 0"));
        }
        if !(-90.0..=90.0).contains(&self.fallback_latitude) {
            return Err(Error::Config("fallback_latitude out of range"));
        }
        if !(-180.0..=180.0).contains(&self.fallback_longitude) {
            return Err(Error::Config("fallback_longitude out of range"));
        }
        if self.battery_percent > 100 {
            return Err(Error::Config("battery_percent must be <= 100"));
        }
        if self.report_baud == 0 || self.gps_baud == 0 {
            return Err(Error::Config("baud rates must be > 0"));
        }
        Ok(())
    }

    /// Nominal cycle period, ignoring sensor read latency.
    pub fn nominal_cycle_ms(&self) -> u32 {
        self.acquisition_window_ms.saturating_add(self.cycle_delay_ms)
    }
}
