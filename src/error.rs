//! Unified error types for the helmet firmware.
//!
//! Drivers return these; the sensor-report loop never propagates them.
//! Each one is turned into a fixed fallback value at the adapter or
//! service boundary, so the loop keeps reporting with partial failures.
//! All variants are `Copy` so they can be passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sensor could not be read or returned corrupt data.
    Sensor(SensorError),
    /// A serial link failed.
    Comms(CommsError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Comms(e) => write!(f, "comms: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The single-wire sensor did not answer within its timing budget.
    Timeout,
    /// The single-wire frame checksum did not match.
    Checksum,
    /// A GPIO read or write on the sensor line failed.
    Pin,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "response timeout"),
            Self::Checksum => write!(f, "checksum mismatch"),
            Self::Pin => write!(f, "pin access failed"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Communications errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommsError {
    /// The UART driver rejected or truncated a write.
    UartWriteFailed,
    /// The UART driver returned an error on read.
    UartReadFailed,
    /// The status report could not be encoded.
    Encode,
    /// An inbound line was not a well-formed status report.
    Decode,
}

impl fmt::Display for CommsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UartWriteFailed => write!(f, "UART write failed"),
            Self::UartReadFailed => write!(f, "UART read failed"),
            Self::Encode => write!(f, "report encoding failed"),
            Self::Decode => write!(f, "report decoding failed"),
        }
    }
}

impl From<CommsError> for Error {
    fn from(e: CommsError) -> Self {
        Self::Comms(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
