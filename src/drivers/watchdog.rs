//! Task Watchdog Timer (TWDT) for the sensor-report loop.
//!
//! One cycle takes about a second, so a loop that has not come back for
//! [`TIMEOUT_MS`] is wedged in a driver. The TWDT then panics and the
//! helmet reboots rather than going silent.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::{info, warn};

/// Reset deadline for one cycle.
pub const TIMEOUT_MS: u32 = 5_000;

pub struct CycleWatchdog {
    subscribed: bool,
}

impl CycleWatchdog {
    /// Subscribe the calling task. A failed subscription is logged and the
    /// loop runs unwatched.
    #[cfg(target_os = "espidf")]
    pub fn subscribe() -> Self {
        let cfg = esp_task_wdt_config_t {
            timeout_ms: TIMEOUT_MS,
            idle_core_mask: 0,
            trigger_panic: true,
        };
        // SAFETY: plain FFI calls on the current task, before the loop.
        let ret = unsafe { esp_task_wdt_reconfigure(&cfg) };
        if ret != ESP_OK as i32 {
            warn!("TWDT reconfigure returned {} (already configured?)", ret);
        }
        let ret = unsafe { esp_task_wdt_add(core::ptr::null_mut()) };
        let subscribed = ret == ESP_OK as i32;
        if subscribed {
            info!("Watchdog: loop task subscribed ({} ms)", TIMEOUT_MS);
        } else {
            warn!("Watchdog: subscribe failed ({})", ret);
        }
        Self { subscribed }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn subscribe() -> Self {
        log::info!("Watchdog(sim): no-op");
        Self { subscribed: false }
    }

    /// Whether feeds reach the hardware watchdog.
    pub fn is_armed(&self) -> bool {
        self.subscribed
    }

    /// Call once per completed cycle.
    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        if self.subscribed {
            // SAFETY: the task was added in subscribe().
            unsafe {
                esp_task_wdt_reset();
            }
        }
    }
}
