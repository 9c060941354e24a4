//! MQ-9 combustible gas / CO sensor on an ADC1 channel.
//!
//! The sensor's analog output is sampled once per cycle. Three named
//! channels are derived from the one raw reading. Today each is the raw
//! value unchanged: the board has a single MQ-9 and no per-gas
//! calibration curves yet, so the three numbers are not independent
//! measurements. The channels stay separate so the report schema does
//! not change when real curves land.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the ADC1 oneshot channel configured by hw_init.
//! On host/test: reads from a static `AtomicU16` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
static SIM_GAS_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_gas_adc(raw: u16) {
    SIM_GAS_ADC.store(raw, Ordering::Relaxed);
}

/// Methane (CH4) from raw ADC counts. Identity until calibrated.
pub fn calc_ch4(raw: u16) -> f32 {
    f32::from(raw)
}

/// Carbon monoxide from raw ADC counts. Identity until calibrated.
pub fn calc_co(raw: u16) -> f32 {
    f32::from(raw)
}

/// LPG / natural gas from raw ADC counts. Identity until calibrated.
pub fn calc_lpg(raw: u16) -> f32 {
    f32::from(raw)
}

/// The three derived gas channels for one reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasChannels {
    pub methane: f32,
    pub carbon_monoxide: f32,
    pub lpg: f32,
}

impl GasChannels {
    pub fn from_raw(raw: u16) -> Self {
        Self {
            methane: calc_ch4(raw),
            carbon_monoxide: calc_co(raw),
            lpg: calc_lpg(raw),
        }
    }
}

pub struct GasSensor {
    #[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
    adc_channel: u32,
}

impl GasSensor {
    pub fn new(adc_channel: u32) -> Self {
        Self { adc_channel }
    }

    /// One raw sample in native ADC counts.
    pub fn read_raw(&self) -> u16 {
        self.read_adc()
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(self.adc_channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_GAS_ADC.load(Ordering::Relaxed)
    }
}
