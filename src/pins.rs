//! GPIO / peripheral pin assignments for the helmet board (ESP32 DevKit).
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers. Where the HAL wants a typed pin (the DHT11
//! line), `main.rs` checks its choice against this map at compile time.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// MQ-9 gas sensor analog output: ADC1 channel 6, which is GPIO34 on the
/// classic ESP32. The oneshot driver addresses it by channel only.
pub const GAS_ADC_CHANNEL: u32 = 6;

// ---------------------------------------------------------------------------
// Sensors — Digital
// ---------------------------------------------------------------------------

/// DHT11 temperature/humidity single-wire data line. esp-idf-hal pin types
/// are fixed per GPIO, so `main.rs` takes `gpio32` and asserts it matches.
pub const DHT_GPIO: i32 = 32;

/// Panic button. Active-low, internal pull-up enabled.
pub const BUTTON_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// Alert actuator
// ---------------------------------------------------------------------------

/// Alert LED (active HIGH).
pub const LED_GPIO: i32 = 5;
/// Vibration motor driver (active HIGH).
pub const MOTOR_GPIO: i32 = 14;

// ---------------------------------------------------------------------------
// UART
// ---------------------------------------------------------------------------

/// Host link: USB-serial console on UART0.
pub const REPORT_UART: i32 = 0;

/// GPS receiver on UART2.
pub const GPS_UART: i32 = 2;
pub const GPS_RX_GPIO: i32 = 16;
pub const GPS_TX_GPIO: i32 = 17;

/// Driver RX ring buffer size for both UARTs (bytes).
pub const UART_RX_BUFFER: i32 = 1024;
