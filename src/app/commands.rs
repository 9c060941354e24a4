//! Inbound alert commands from the host controller.
//!
//! The host pushes single ASCII bytes over the report link. Only two are
//! meaningful today; every other byte is a no-op so newer hosts can add
//! commands without breaking older helmets.

use super::state::ActuatorState;

/// Byte that switches the alert on.
pub const ALERT_ON_BYTE: u8 = b'1';
/// Byte that switches the alert off.
pub const ALERT_OFF_BYTE: u8 = b'0';

/// Commands the host controller can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertCommand {
    /// Light and motor on.
    On,
    /// Light and motor off.
    Off,
}

impl AlertCommand {
    /// Decode one inbound byte. Unknown bytes yield `None`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            ALERT_ON_BYTE => Some(Self::On),
            ALERT_OFF_BYTE => Some(Self::Off),
            _ => None,
        }
    }

    /// Actuator pair this command drives.
    pub fn target_state(self) -> ActuatorState {
        match self {
            Self::On => ActuatorState::ON,
            Self::Off => ActuatorState::OFF,
        }
    }
}
