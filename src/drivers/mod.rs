//! Peripheral drivers: one-shot init, alert outputs, panic button, UARTs
//! and the task watchdog.

pub mod alert;
pub mod hw_init;
pub mod panic_button;
pub mod uart;
pub mod watchdog;
