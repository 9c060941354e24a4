//! Safety helmet firmware library.
//!
//! Exposes the loop, its ports and the drivers for the firmware binary
//! and for host integration tests. All ESP-IDF-specific code is guarded
//! by `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod gps;
pub mod pins;

pub mod adapters;
pub mod drivers;
pub mod sensors;
