//! Application core — the sensor-report loop, zero direct I/O.
//!
//! This module contains the per-cycle rules for the helmet: command
//! intake, sensor acquisition with fallbacks, panic-button snapshot, and
//! status report emission. All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod report;
pub mod service;
pub mod state;
