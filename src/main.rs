//! Safety Helmet Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  HardwareAdapter     HostLink             GpsLink            │
//! │  (Sensor+Actuator)   (Command+Report)     (GpsStream)        │
//! │  LogEventSink        Esp32TimeAdapter                        │
//! │  (EventSink)         (TimePort)                              │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ─────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │          HelmetService (pure logic)                │      │
//! │  │  intake · acquire · snapshot · emit · delay        │      │
//! │  └────────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Result;
use esp_idf_hal::delay::Ets;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::{error, info, warn};

use helmet::adapters::hardware::HardwareAdapter;
use helmet::adapters::log_sink::LogEventSink;
use helmet::adapters::serial::{GpsLink, HostLink};
use helmet::adapters::time::Esp32TimeAdapter;
use helmet::app::service::HelmetService;
use helmet::config::HelmetConfig;
use helmet::drivers::alert::AlertDriver;
use helmet::drivers::hw_init;
use helmet::drivers::panic_button::PanicButton;
use helmet::drivers::uart::UartPort;
use helmet::drivers::watchdog::CycleWatchdog;
use helmet::pins;
use helmet::sensors::SensorHub;
use helmet::sensors::dht11::Dht11;
use helmet::sensors::gas::GasSensor;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Safety Helmet v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = HelmetConfig::default();
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            warn!("Config rejected ({}), using defaults", e);
            HelmetConfig::default()
        }
    };
    if let Ok(json) = serde_json::to_string(&config) {
        info!("Config: {}", json);
    }

    // ── 3. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Keep going: whatever did come up still gets reported.
        error!("HAL init failed: {}, continuing degraded", e);
    }

    let peripherals = Peripherals::take()?;
    const _: () = assert!(pins::DHT_GPIO == 32);
    let mut dht_pin = PinDriver::input_output_od(peripherals.pins.gpio32)?;
    dht_pin.set_pull(Pull::Up)?;
    dht_pin.set_high()?;

    let host_uart = UartPort::install(
        pins::REPORT_UART,
        config.report_baud,
        None,
        None,
        pins::UART_RX_BUFFER,
    )?;
    let gps_uart = UartPort::install(
        pins::GPS_UART,
        config.gps_baud,
        Some(pins::GPS_TX_GPIO),
        Some(pins::GPS_RX_GPIO),
        pins::UART_RX_BUFFER,
    )?;

    // ── 4. Adapters ───────────────────────────────────────────
    let sensor_hub = SensorHub::new(
        GasSensor::new(pins::GAS_ADC_CHANNEL),
        Dht11::new(dht_pin, Ets),
        PanicButton::new(pins::BUTTON_GPIO),
    );
    let mut hw = HardwareAdapter::new(sensor_hub, AlertDriver::new());
    let mut link = HostLink::new(host_uart);
    let mut gps = GpsLink::new(gps_uart);
    let mut clock = Esp32TimeAdapter::new();
    let mut sink = LogEventSink::new();

    // ── 5. Loop ───────────────────────────────────────────────
    let mut service = HelmetService::new(config);
    service.start(&mut hw, &mut link, &mut sink);

    let watchdog = CycleWatchdog::subscribe();
    loop {
        service.run_cycle(&mut hw, &mut link, &mut gps, &mut clock, &mut sink);
        watchdog.feed();
    }
}
