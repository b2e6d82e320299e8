//! Pin Capability Provider
//!
//! Binds a GPIO line to an event channel so that the channel toggles the
//! line in hardware, without processor involvement.

use crate::types::{ChannelId, Level, PinId};

/// How a bound pin behaves
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinTask {
    /// Line is active when driven high
    pub active_high: bool,
    /// Level driven right after binding
    pub initial: Level,
}

impl PinTask {
    /// Event-triggered output that starts in its inactive state
    #[must_use]
    pub const fn event_output(active_high: bool) -> Self {
        Self {
            active_high,
            initial: Level::for_state(active_high, false),
        }
    }
}

/// Pin provider failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin does not exist on this device
    InvalidPin,
    /// Pin is already bound to another task
    PinBusy,
    /// No pin-task slot left to route the channel into
    NoTaskSlot,
}

/// Dedicated event-triggered output capability
pub trait PinBinder {
    /// Route `channel` to toggle `pin` and configure the output
    fn bind_pin_to_channel(
        &mut self,
        pin: PinId,
        channel: ChannelId,
        mode: PinTask,
    ) -> Result<(), PinError>;

    /// Undo a previous binding and return the pin to the default state
    fn release_pin(&mut self, pin: PinId);
}
