//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns the gas sensor, the DHT11 and the panic button, and hands
//! out raw readings. Fallback substitution is left to the service.

pub mod dht11;
pub mod gas;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::debug;

use crate::app::ports::ClimateReading;
use crate::drivers::panic_button::PanicButton;
use dht11::Dht11;
use gas::GasSensor;

/// Replace a NaN reading with 0.0; pass everything else through.
pub fn or_zero(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value }
}

/// Aggregates the sensor drivers.
pub struct SensorHub<P, D> {
    pub gas: GasSensor,
    pub climate: Dht11<P, D>,
    pub button: PanicButton,
}

impl<P, D> SensorHub<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// Construct a new hub. Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(gas: GasSensor, climate: Dht11<P, D>, button: PanicButton) -> Self {
        Self { gas, climate, button }
    }

    pub fn read_gas_raw(&mut self) -> u16 {
        self.gas.read_raw()
    }

    /// One climate measurement; a driver error becomes NaN in both fields.
    pub fn read_climate(&mut self) -> ClimateReading {
        match self.climate.read() {
            Ok(reading) => reading,
            Err(e) => {
                debug!("DHT11 read failed: {}", e);
                ClimateReading::FAULT
            }
        }
    }

    pub fn panic_line_low(&mut self) -> bool {
        self.button.line_low()
    }
}
