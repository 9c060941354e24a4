//! Serial adapters: the host link and the GPS receiver stream.
//!
//! | Adapter    | Implements                  | UART                  |
//! |------------|-----------------------------|-----------------------|
//! | `HostLink` | CommandPort, ReportPort     | UART0 (USB-serial)    |
//! | `GpsLink`  | GpsStreamPort               | UART2 (GPIO16/17)     |
//!
//! Read errors are logged and read as "nothing pending" so the loop
//! carries on with its fallbacks.

use log::warn;

use crate::app::ports::{CommandPort, GpsStreamPort, ReportPort};
use crate::drivers::uart::UartPort;
use crate::error::Error;

/// Line terminator appended to every outbound line.
pub const LINE_END: &[u8] = b"\r\n";

// ── Host link ─────────────────────────────────────────────────

pub struct HostLink {
    uart: UartPort,
}

impl HostLink {
    pub fn new(uart: UartPort) -> Self {
        Self { uart }
    }
}

impl CommandPort for HostLink {
    fn poll_command_byte(&mut self) -> Option<u8> {
        self.uart.read_byte().unwrap_or_else(|e| {
            warn!("Host link read failed: {}", e);
            None
        })
    }
}

impl ReportPort for HostLink {
    fn send_line(&mut self, line: &str) -> Result<(), Error> {
        self.uart.write_all(line.as_bytes())?;
        self.uart.write_all(LINE_END)?;
        Ok(())
    }
}

// ── GPS link ──────────────────────────────────────────────────

pub struct GpsLink {
    uart: UartPort,
}

impl GpsLink {
    pub fn new(uart: UartPort) -> Self {
        Self { uart }
    }
}

impl GpsStreamPort for GpsLink {
    fn poll_gps_byte(&mut self) -> Option<u8> {
        self.uart.read_byte().unwrap_or_else(|e| {
            warn!("GPS read failed on UART{}: {}", self.uart.port(), e);
            None
        })
    }
}
