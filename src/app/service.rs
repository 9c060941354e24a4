//! Application service — the sensor-report loop.
//!
//! [`HelmetService`] owns the GPS decoder and the live alert state. Every
//! cycle runs the same strictly sequential steps:
//!
//! ```text
//!  CommandPort ──▶ ┌──────────────────────────────┐ ──▶ ActuatorPort
//!   SensorPort ──▶ │         HelmetService        │
//!GpsStreamPort ──▶ │ intake · acquire · snapshot  │ ──▶ ReportPort
//!     TimePort ──▶ │      · emit · delay          │ ──▶ EventSink
//!                  └──────────────────────────────┘
//! ```
//!
//! Nothing here returns an error. Each failing input has a fixed
//! substitute, and the loop always reaches the report and the delay.
//! A command byte that arrives during the acquisition window or the
//! end-of-cycle delay waits in the UART buffer until the next intake.

use log::{debug, info, warn};

use crate::config::HelmetConfig;
use crate::gps::GpsDecoder;
use crate::sensors::{self, gas::GasChannels};

use super::commands::AlertCommand;
use super::events::AppEvent;
use super::ports::{
    ActuatorPort, CommandPort, EventSink, GpsStreamPort, ReportPort, SensorPort, TimePort,
};
use super::report::StatusReport;
use super::state::{ActuatorState, SensorSample};

/// First line written on the report channel after boot. Hosts skip it
/// because it is not a JSON object.
pub const BANNER: &str = "Safety Helmet System Started - Waiting for host commands...";

// ───────────────────────────────────────────────────────────────
// HelmetService
// ───────────────────────────────────────────────────────────────

/// The single-task loop that turns sensor readings into status reports.
pub struct HelmetService {
    config: HelmetConfig,
    /// Only state that carries across cycles besides `alert`.
    gps: GpsDecoder,
    alert: ActuatorState,
    cycle_count: u64,
    fix_announced: bool,
}

impl HelmetService {
    /// Construct the service. Call [`start`](Self::start) before cycling.
    pub fn new(config: HelmetConfig) -> Self {
        Self {
            config,
            gps: GpsDecoder::new(),
            alert: ActuatorState::OFF,
            cycle_count: 0,
            fix_announced: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Force the alert outputs off and announce readiness to the host.
    pub fn start(
        &mut self,
        hw: &mut impl ActuatorPort,
        link: &mut impl ReportPort,
        sink: &mut impl EventSink,
    ) {
        self.alert = ActuatorState::OFF;
        hw.apply_alert(self.alert);
        if let Err(e) = link.send_line(BANNER) {
            warn!("Banner not sent: {}", e);
        }
        sink.emit(&AppEvent::Started(self.alert));
        info!(
            "HelmetService started as {} (cycle ~{} ms)",
            self.config.helmet_id,
            self.config.nominal_cycle_ms()
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// One full cycle: intake → acquisition → snapshot → emission → delay.
    ///
    /// `hw` satisfies both [`SensorPort`] and [`ActuatorPort`], and `link`
    /// both [`CommandPort`] and [`ReportPort`], since each pair shares one
    /// physical resource.
    pub fn run_cycle<H, L, G, T, E>(
        &mut self,
        hw: &mut H,
        link: &mut L,
        gps: &mut G,
        clock: &mut T,
        sink: &mut E,
    ) -> StatusReport
    where
        H: SensorPort + ActuatorPort,
        L: CommandPort + ReportPort,
        G: GpsStreamPort,
        T: TimePort,
        E: EventSink,
    {
        self.cycle_count += 1;

        // 1. Command intake (non-blocking, at most one byte)
        self.intake_command(link, hw, sink);

        // 2. Sensor acquisition (blocks for the GPS window)
        let mut sample = self.acquire(hw, gps, clock, sink);

        // 3. Panic button snapshot
        sample.emergency = self.snapshot_emergency(hw);

        // 4. Report emission
        let report = StatusReport::from_sample(&self.config, &sample);
        self.emit_report(&report, link, sink);

        // 5. Fixed end-of-cycle delay
        clock.delay_ms(self.config.cycle_delay_ms);

        report
    }

    /// Consume at most one pending command byte and apply it.
    pub fn intake_command(
        &mut self,
        link: &mut impl CommandPort,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        let Some(byte) = link.poll_command_byte() else {
            return;
        };

        match AlertCommand::from_byte(byte) {
            Some(cmd) => {
                let from = self.alert;
                let to = cmd.target_state();
                hw.apply_alert(to);
                self.alert = to;
                if from != to {
                    sink.emit(&AppEvent::AlertChanged { from, to });
                }
            }
            None => sink.emit(&AppEvent::CommandIgnored(byte)),
        }
    }

    /// Read gas and climate, then run the GPS acquisition window.
    ///
    /// The returned sample has `emergency` cleared; the snapshot step
    /// fills it in.
    pub fn acquire(
        &mut self,
        hw: &mut impl SensorPort,
        gps: &mut impl GpsStreamPort,
        clock: &mut impl TimePort,
        sink: &mut impl EventSink,
    ) -> SensorSample {
        // Gas
        let gas_raw = hw.read_gas_raw();
        let gas = GasChannels::from_raw(gas_raw);

        // Climate, zeroed on NaN
        let climate = hw.read_climate();
        let temperature_nan = climate.temperature_c.is_nan();
        let humidity_nan = climate.humidity_pct.is_nan();
        if temperature_nan || humidity_nan {
            sink.emit(&AppEvent::ClimateFault {
                temperature: temperature_nan,
                humidity: humidity_nan,
            });
        }

        // GPS
        self.accumulate_gps(gps, clock);
        let (latitude, longitude) = match self.gps.location() {
            Some(fix) => {
                if !self.fix_announced {
                    self.fix_announced = true;
                    sink.emit(&AppEvent::GpsFixAcquired {
                        latitude: fix.latitude,
                        longitude: fix.longitude,
                    });
                }
                (fix.latitude, fix.longitude)
            }
            None => (self.config.fallback_latitude, self.config.fallback_longitude),
        };

        SensorSample {
            gas_raw,
            methane: gas.methane,
            carbon_monoxide: gas.carbon_monoxide,
            lpg: gas.lpg,
            temperature_c: sensors::or_zero(climate.temperature_c),
            humidity_pct: sensors::or_zero(climate.humidity_pct),
            latitude,
            longitude,
            emergency: false,
        }
    }

    /// Sample the panic button once. The line is active-low.
    pub fn snapshot_emergency(&self, hw: &mut impl SensorPort) -> bool {
        hw.panic_line_low()
    }

    /// Encode and transmit the report. Failures are logged, never raised.
    pub fn emit_report(
        &self,
        report: &StatusReport,
        link: &mut impl ReportPort,
        sink: &mut impl EventSink,
    ) {
        let sent = report.to_line().and_then(|line| link.send_line(&line));
        if let Err(e) = sent {
            warn!("Report not sent: {}", e);
            sink.emit(&AppEvent::ReportFailed(e));
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current alert outputs.
    pub fn alert_state(&self) -> ActuatorState {
        self.alert
    }

    /// Cycles run since construction.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// The GPS decoder, for diagnostics.
    pub fn gps(&self) -> &GpsDecoder {
        &self.gps
    }

    pub fn config(&self) -> &HelmetConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    /// Feed receiver bytes to the decoder until the window elapses.
    fn accumulate_gps(&mut self, gps: &mut impl GpsStreamPort, clock: &impl TimePort) {
        let window = u64::from(self.config.acquisition_window_ms);
        let start = clock.uptime_ms();
        let mut fed: u32 = 0;

        while clock.uptime_ms().saturating_sub(start) < window {
            if let Some(byte) = gps.poll_gps_byte() {
                self.gps.encode(byte);
                fed += 1;
            }
        }

        debug!(
            "GPS window: {} bytes, fix={}, sats={}, bad_checksums={}",
            fed,
            self.gps.has_fix(),
            self.gps.satellites(),
            self.gps.failed_checksums()
        );
    }
}
