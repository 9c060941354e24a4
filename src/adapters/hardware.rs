//! Hardware adapter: bridges the sensors and the alert outputs to the
//! domain port traits.
//!
//! Owns the [`SensorHub`] and the [`AlertDriver`], exposing them through
//! [`SensorPort`] and [`ActuatorPort`]. On non-espidf targets the
//! underlying drivers use cfg-gated simulation stubs.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::app::ports::{ActuatorPort, ClimateReading, SensorPort};
use crate::app::state::ActuatorState;
use crate::drivers::alert::AlertDriver;
use crate::sensors::SensorHub;

/// Concrete adapter combining every on-board peripheral except the UARTs.
pub struct HardwareAdapter<P, D> {
    sensor_hub: SensorHub<P, D>,
    alert: AlertDriver,
}

impl<P, D> HardwareAdapter<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    pub fn new(sensor_hub: SensorHub<P, D>, alert: AlertDriver) -> Self {
        Self { sensor_hub, alert }
    }

    /// Last state written to the alert outputs.
    pub fn alert_state(&self) -> ActuatorState {
        self.alert.state()
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<P, D> SensorPort for HardwareAdapter<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn read_gas_raw(&mut self) -> u16 {
        self.sensor_hub.read_gas_raw()
    }

    fn read_climate(&mut self) -> ClimateReading {
        self.sensor_hub.read_climate()
    }

    fn panic_line_low(&mut self) -> bool {
        self.sensor_hub.panic_line_low()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<P, D> ActuatorPort for HardwareAdapter<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn apply_alert(&mut self, state: ActuatorState) {
        self.alert.apply(state);
    }
}
