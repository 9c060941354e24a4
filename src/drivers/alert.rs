//! Alert actuator: warning LED and vibration motor.
//!
//! Both outputs are plain push-pull GPIOs configured by
//! [`hw_init`](super::hw_init). They always move together.

use crate::app::state::ActuatorState;
use crate::pins;

use super::hw_init;

pub struct AlertDriver {
    led_gpio: i32,
    motor_gpio: i32,
    state: ActuatorState,
}

impl AlertDriver {
    /// Driver on the board's LED and motor pins, initially off.
    pub fn new() -> Self {
        Self::on_pins(pins::LED_GPIO, pins::MOTOR_GPIO)
    }

    pub fn on_pins(led_gpio: i32, motor_gpio: i32) -> Self {
        Self {
            led_gpio,
            motor_gpio,
            state: ActuatorState::OFF,
        }
    }

    /// Drive both outputs. Writes happen even if `state` is unchanged.
    pub fn apply(&mut self, state: ActuatorState) {
        hw_init::gpio_write(self.led_gpio, state.light);
        hw_init::gpio_write(self.motor_gpio, state.motor);
        self.state = state;
    }

    /// Last state written.
    pub fn state(&self) -> ActuatorState {
        self.state
    }
}

impl Default for AlertDriver {
    fn default() -> Self {
        Self::new()
    }
}
