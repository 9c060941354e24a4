//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements              | Connects to              |
//! |------------|-------------------------|--------------------------|
//! | `hardware` | SensorPort              | ESP32 ADC, DHT11, GPIO   |
//! |            | ActuatorPort            | LED and motor GPIOs      |
//! | `log_sink` | EventSink               | Serial log output        |
//! | `serial`   | CommandPort, ReportPort | UART0 host link          |
//! |            | GpsStreamPort           | UART2 GPS receiver       |
//! | `time`     | TimePort                | ESP32 system timer       |

pub mod hardware;
pub mod log_sink;
pub mod serial;
pub mod time;
