//! DHT11 temperature / humidity sensor on a single open-drain data line.
//!
//! ## Protocol
//!
//! 1. Host pulls the line low for ≥ 18 ms, then releases it.
//! 2. Sensor answers with 80 µs low, 80 µs high.
//! 3. 40 data bits follow. Each bit is 50 µs low, then high for
//!    ~27 µs (`0`) or ~70 µs (`1`).
//! 4. Frame: humidity int, humidity dec, temp int, temp dec, checksum.
//!
//! Pulse widths are measured by polling the pin with 1 µs delays, so the
//! counts are lower bounds on the real width. Each bit is decided by
//! comparing its high pulse with the low pulse before it, which keeps a
//! few µs of polling jitter from flipping a `0` into a `1`. On ESP-IDF the
//! timed part of the transaction runs with interrupts masked.
//!
//! The driver is generic over `embedded-hal` 1.0 pin and delay traits: on
//! ESP-IDF it runs on an open-drain `PinDriver` with the `Ets` busy-wait
//! delay.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::app::ports::ClimateReading;
use crate::error::SensorError;

const START_LOW_MS: u32 = 18;
/// Per-edge wait budget (µs).
const EDGE_TIMEOUT_US: u32 = 100;

pub struct Dht11<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Dht11<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// `pin` must already be configured open-drain with the line released.
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    /// Run one full transaction.
    pub fn read(&mut self) -> Result<ClimateReading, SensorError> {
        let frame = self.read_frame()?;
        decode_frame(frame)
    }

    fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        // Start signal
        self.pin.set_low().map_err(|_| SensorError::Pin)?;
        self.delay.delay_ms(START_LOW_MS);
        self.pin.set_high().map_err(|_| SensorError::Pin)?;

        #[cfg(target_os = "espidf")]
        let frame = esp_idf_hal::interrupt::free(|| self.read_bits());
        #[cfg(not(target_os = "espidf"))]
        let frame = self.read_bits();
        frame
    }

    /// Response and 40 data bits. Timing-critical, about 5 ms.
    fn read_bits(&mut self) -> Result<[u8; 5], SensorError> {
        // Response: line goes low, high, then low for the first bit
        self.wait_for(false)?;
        self.wait_for(true)?;
        self.wait_for(false)?;

        let mut frame = [0u8; 5];
        for bit in 0..40 {
            let low_us = self.wait_for(true)?;
            let high_us = self.wait_for(false)?;
            if high_us > low_us {
                frame[bit / 8] |= 0x80 >> (bit % 8);
            }
        }
        Ok(frame)
    }

    /// Poll until the line reaches `high`; returns µs spent waiting.
    fn wait_for(&mut self, high: bool) -> Result<u32, SensorError> {
        let mut elapsed = 0;
        loop {
            let level = self.pin.is_high().map_err(|_| SensorError::Pin)?;
            if level == high {
                return Ok(elapsed);
            }
            if elapsed >= EDGE_TIMEOUT_US {
                return Err(SensorError::Timeout);
            }
            self.delay.delay_us(1);
            elapsed += 1;
        }
    }
}

/// Validate the checksum and convert a raw frame.
pub fn decode_frame(frame: [u8; 5]) -> Result<ClimateReading, SensorError> {
    let sum = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        return Err(SensorError::Checksum);
    }

    let humidity_pct = f32::from(frame[0]) + f32::from(frame[1]) * 0.1;
    let magnitude = f32::from(frame[2]) + f32::from(frame[3] & 0x0F) * 0.1;
    // Bit 7 of the decimal byte flags sub-zero readings on newer parts.
    let temperature_c = if frame[3] & 0x80 != 0 { -magnitude } else { magnitude };

    Ok(ClimateReading {
        temperature_c,
        humidity_pct,
    })
}
