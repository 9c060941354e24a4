//! Per-cycle domain values: the alert actuator pair and the sensor sample.

/// The two alert outputs. Always set together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActuatorState {
    /// Alert LED.
    pub light: bool,
    /// Vibration motor.
    pub motor: bool,
}

impl ActuatorState {
    pub const OFF: Self = Self { light: false, motor: false };
    pub const ON: Self = Self { light: true, motor: true };

    pub fn is_on(self) -> bool {
        self.light && self.motor
    }
}

/// Everything acquired in one cycle. Discarded after the report is sent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSample {
    /// Raw gas ADC reading (0 – 4095 on a 12-bit ADC).
    pub gas_raw: u16,
    /// Methane channel.
    pub methane: f32,
    /// Carbon monoxide channel.
    pub carbon_monoxide: f32,
    /// LPG / natural gas channel.
    pub lpg: f32,
    /// Ambient temperature (°C), 0.0 on sensor fault.
    pub temperature_c: f32,
    /// Relative humidity (%RH), 0.0 on sensor fault.
    pub humidity_pct: f32,
    /// Latitude (degrees), fallback constant without a fix.
    pub latitude: f64,
    /// Longitude (degrees), fallback constant without a fix.
    pub longitude: f64,
    /// Panic button pressed at snapshot time.
    pub emergency: bool,
}
