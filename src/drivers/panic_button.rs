//! Panic button on an internally pulled-up input.
//!
//! Pressing the button shorts the line to ground, so the level is low
//! exactly while it is held. There is no latching and no debounce: the
//! loop samples the line once per cycle.

use super::hw_init;

pub struct PanicButton {
    gpio: i32,
}

impl PanicButton {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// `true` while the button is held down.
    pub fn line_low(&self) -> bool {
        !hw_init::gpio_read(self.gpio)
    }
}
