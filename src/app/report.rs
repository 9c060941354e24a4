//! Status report schema and its single-line JSON encoding.
//!
//! One report is produced per cycle and travels one way, helmet → host.
//! The host treats every field as always present, so the struct has no
//! optional members and serde emits fields in declaration order:
//!
//! ```text
//! {"helmetId":"SH-001","gas":512.00,"methane":512.00,"natural_gas":512.00,
//!  "temperature":25.30,"humidity":60.00,"latitude":23.662260,
//!  "longitude":86.472677,"battery":100,"emergency":false}
//! ```
//!
//! Coordinates carry six fractional digits; the other floating fields
//! carry two.

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::config::{HelmetConfig, HelmetId};
use crate::error::{CommsError, Result};

use super::state::SensorSample;

/// Wire names in emission order.
pub const FIELD_ORDER: [&str; 10] = [
    "helmetId",
    "gas",
    "methane",
    "natural_gas",
    "temperature",
    "humidity",
    "latitude",
    "longitude",
    "battery",
    "emergency",
];

/// The externally visible per-cycle record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    #[serde(rename = "helmetId")]
    pub helmet_id: HelmetId,
    /// Carbon monoxide channel.
    #[serde(serialize_with = "two_places")]
    pub gas: f32,
    #[serde(serialize_with = "two_places")]
    pub methane: f32,
    /// LPG channel.
    #[serde(serialize_with = "two_places")]
    pub natural_gas: f32,
    #[serde(serialize_with = "two_places")]
    pub temperature: f32,
    #[serde(serialize_with = "two_places")]
    pub humidity: f32,
    #[serde(serialize_with = "six_places")]
    pub latitude: f64,
    #[serde(serialize_with = "six_places")]
    pub longitude: f64,
    /// Placeholder; the helmet does not measure its battery.
    pub battery: u8,
    pub emergency: bool,
}

impl StatusReport {
    /// Build the report for one cycle's sample.
    pub fn from_sample(config: &HelmetConfig, sample: &SensorSample) -> Self {
        Self {
            helmet_id: config.helmet_id.clone(),
            gas: sample.carbon_monoxide,
            methane: sample.methane,
            natural_gas: sample.lpg,
            temperature: sample.temperature_c,
            humidity: sample.humidity_pct,
            latitude: sample.latitude,
            longitude: sample.longitude,
            battery: config.battery_percent,
            emergency: sample.emergency,
        }
    }

    /// Encode as one compact JSON object, without line terminator.
    pub fn to_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|_| CommsError::Encode.into())
    }

    /// Decode a line received from the helmet.
    ///
    /// Lines that do not look like a JSON object (boot banner, log noise)
    /// are rejected before parsing.
    pub fn parse_line(line: &str) -> Result<Self> {
        let line = line.trim();
        if !(line.starts_with('{') && line.ends_with('}')) {
            return Err(CommsError::Decode.into());
        }
        serde_json::from_str(line).map_err(|_| CommsError::Decode.into())
    }
}

fn two_places<S: Serializer>(value: &f32, s: S) -> core::result::Result<S::Ok, S::Error> {
    fixed_point(f64::from(*value), 2, s)
}

fn six_places<S: Serializer>(value: &f64, s: S) -> core::result::Result<S::Ok, S::Error> {
    fixed_point(*value, 6, s)
}

/// Emit `value` as a JSON number with exactly `places` fractional digits.
fn fixed_point<S: Serializer>(
    value: f64,
    places: usize,
    s: S,
) -> core::result::Result<S::Ok, S::Error> {
    // JSON has no NaN/inf.
    let value = if value.is_finite() { value } else { 0.0 };
    let raw = RawValue::from_string(format!("{value:.places$}")).map_err(S::Error::custom)?;
    raw.serialize(s)
}
