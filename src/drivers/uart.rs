//! Byte-level UART access for the host link and the GPS receiver.
//!
//! Reads never block: each call pulls at most one byte out of the
//! driver's RX ring buffer, or reports that it is empty. Writes block
//! until the bytes are queued for transmission.
//!
//! Host builds replace the driver with per-port in-memory queues so the
//! serial adapters can be tested without hardware.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::error::CommsError;

use super::hw_init::HwInitError;

/// A UART port with the ESP-IDF driver installed.
pub struct UartPort {
    port: i32,
}

impl UartPort {
    /// Configure 8N1 at `baud`, route the pins and install the driver.
    ///
    /// `None` for a pin keeps the port's default routing (UART0 stays on
    /// the USB-serial bridge).
    #[cfg(target_os = "espidf")]
    pub fn install(
        port: i32,
        baud: u32,
        tx_gpio: Option<i32>,
        rx_gpio: Option<i32>,
        rx_buffer: i32,
    ) -> Result<Self, HwInitError> {
        // UART_PIN_NO_CHANGE
        const KEEP: i32 = -1;

        let cfg = uart_config_t {
            baud_rate: baud as i32,
            data_bits: uart_word_length_t_UART_DATA_8_BITS,
            parity: uart_parity_t_UART_PARITY_DISABLE,
            stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
            flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
            ..Default::default()
        };
        let fail = |rc| HwInitError::UartInstallFailed { port, rc };

        // SAFETY: one-shot configuration from main() before the loop;
        // each port is installed once.
        unsafe {
            let ret = uart_param_config(port, &cfg);
            if ret != ESP_OK as i32 {
                return Err(fail(ret));
            }
            let ret = uart_set_pin(
                port,
                tx_gpio.unwrap_or(KEEP),
                rx_gpio.unwrap_or(KEEP),
                KEEP,
                KEEP,
            );
            if ret != ESP_OK as i32 {
                return Err(fail(ret));
            }
            let ret = uart_driver_install(port, rx_buffer, 0, 0, core::ptr::null_mut(), 0);
            if ret != ESP_OK as i32 {
                return Err(fail(ret));
            }
        }

        info!("UART{}: {} baud, rx buffer {} B", port, baud, rx_buffer);
        Ok(Self { port })
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn install(
        port: i32,
        baud: u32,
        _tx_gpio: Option<i32>,
        _rx_gpio: Option<i32>,
        _rx_buffer: i32,
    ) -> Result<Self, HwInitError> {
        log::info!("UART{}(sim): {} baud", port, baud);
        sim::reset(port);
        Ok(Self { port })
    }

    pub fn port(&self) -> i32 {
        self.port
    }

    /// Take one byte if one is buffered.
    #[cfg(target_os = "espidf")]
    pub fn read_byte(&mut self) -> Result<Option<u8>, CommsError> {
        let mut byte = 0u8;
        // SAFETY: the driver was installed in install(); the buffer is a
        // live one-byte local. Zero ticks: return immediately.
        let n = unsafe { uart_read_bytes(self.port, (&raw mut byte).cast(), 1, 0) };
        match n {
            1 => Ok(Some(byte)),
            0 => Ok(None),
            _ => Err(CommsError::UartReadFailed),
        }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn read_byte(&mut self) -> Result<Option<u8>, CommsError> {
        Ok(sim::pop_rx(self.port))
    }

    /// Queue every byte of `bytes` for transmission.
    #[cfg(target_os = "espidf")]
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<(), CommsError> {
        // SAFETY: the driver was installed in install(); `bytes` outlives
        // the call, which copies into the driver's TX path.
        let n = unsafe { uart_write_bytes(self.port, bytes.as_ptr().cast(), bytes.len()) };
        if n < 0 || n as usize != bytes.len() {
            return Err(CommsError::UartWriteFailed);
        }
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<(), CommsError> {
        sim::push_tx(self.port, bytes);
        Ok(())
    }
}

// ── Host simulation ───────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
pub use sim::{sim_inject_rx, sim_take_tx};

#[cfg(not(target_os = "espidf"))]
mod sim {
    use std::collections::{HashMap, VecDeque};
    use std::sync::{Mutex, PoisonError};

    #[derive(Default)]
    struct Queues {
        rx: VecDeque<u8>,
        tx: Vec<u8>,
    }

    static PORTS: Mutex<Option<HashMap<i32, Queues>>> = Mutex::new(None);

    fn with_port<R>(port: i32, f: impl FnOnce(&mut Queues) -> R) -> R {
        let mut guard = PORTS.lock().unwrap_or_else(PoisonError::into_inner);
        let ports = guard.get_or_insert_with(HashMap::new);
        f(ports.entry(port).or_default())
    }

    pub(super) fn reset(port: i32) {
        with_port(port, |q| *q = Queues::default());
    }

    pub(super) fn pop_rx(port: i32) -> Option<u8> {
        with_port(port, |q| q.rx.pop_front())
    }

    pub(super) fn push_tx(port: i32, bytes: &[u8]) {
        with_port(port, |q| q.tx.extend_from_slice(bytes));
    }

    /// Append bytes to a port's receive buffer.
    pub fn sim_inject_rx(port: i32, bytes: &[u8]) {
        with_port(port, |q| q.rx.extend(bytes.iter().copied()));
    }

    /// Drain everything written to a port so far.
    pub fn sim_take_tx(port: i32) -> Vec<u8> {
        with_port(port, |q| core::mem::take(&mut q.tx))
    }
}
