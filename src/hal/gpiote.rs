//! GPIOTE/PPI Pin Binder (nRF52 target)
//!
//! Routes a PPI channel's task end point to a GPIOTE toggle task driving
//! the control pin. The radio stack fills in the event end point and
//! enables the channel when it schedules a ramp.

use embassy_nrf::pac;
use embassy_nrf::pac::gpiote::vals::{Mode, Outinit, Polarity};

use crate::config::gpiote::{FIRST_TASK, TASK_SLOTS};
use crate::config::GPIO_PORTS;
use crate::hal::pin::{PinBinder, PinError, PinTask};
use crate::types::{ChannelId, Level, PinId};

const SLOTS: usize = TASK_SLOTS as usize;

/// Pin binder backed by GPIOTE task slots
pub struct GpioteBinder {
    /// Pin and PPI channel held by each task slot
    slots: [Option<(PinId, ChannelId)>; SLOTS],
}

impl GpioteBinder {
    /// Create a binder using task slots from `FIRST_TASK` upward
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; SLOTS],
        }
    }

    fn free_slot(&self) -> Option<usize> {
        (usize::from(FIRST_TASK)..SLOTS).find(|&i| self.slots[i].is_none())
    }
}

impl Default for GpioteBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PinBinder for GpioteBinder {
    fn bind_pin_to_channel(
        &mut self,
        pin: PinId,
        channel: ChannelId,
        mode: PinTask,
    ) -> Result<(), PinError> {
        if pin.port() >= GPIO_PORTS {
            return Err(PinError::InvalidPin);
        }
        if self.slots.iter().flatten().any(|&(p, _)| p == pin) {
            return Err(PinError::PinBusy);
        }
        let slot = self.free_slot().ok_or(PinError::NoTaskSlot)?;

        pac::GPIOTE.config(slot).write(|w| {
            w.set_mode(Mode::TASK);
            w.set_psel(pin.pin());
            w.set_port(pin.port() == 1);
            w.set_polarity(Polarity::TOGGLE);
            w.set_outinit(match mode.initial {
                Level::Low => Outinit::LOW,
                Level::High => Outinit::HIGH,
            });
        });

        let task = pac::GPIOTE.tasks_out(slot).as_ptr() as u32;
        pac::PPI.ch(usize::from(channel.index())).tep().write_value(task);

        self.slots[slot] = Some((pin, channel));
        Ok(())
    }

    fn release_pin(&mut self, pin: PinId) {
        let Some(slot) = self
            .slots
            .iter()
            .position(|s| matches!(s, Some((p, _)) if *p == pin))
        else {
            return;
        };

        if let Some((_, channel)) = self.slots[slot].take() {
            pac::PPI.ch(usize::from(channel.index())).tep().write_value(0);
        }
        pac::GPIOTE.config(slot).write(|w| w.set_mode(Mode::DISABLED));
    }
}
