//! Interface binder
//!
//! Turns a validated descriptor into a live control path: event channels
//! claimed, control pins routed to them, FEM parameters written over the
//! side-channel bus. The call is all-or-nothing. Anything claimed or bound
//! before a failure is released again before the error is returned.

use heapless::Vec;

use crate::config::{CHANNEL_COUNT, STATUS_SUCCESS};
use crate::error::{FemError, FemResult, UnavailableReason};
use crate::fem::descriptor::{ElectricalConfig, InterfaceConfig, PinConfig};
use crate::fem::{nrf2220, validator};
use crate::hal::channel::ChannelFabric;
use crate::hal::i2c::FemBus;
use crate::hal::pin::{PinBinder, PinTask};
use crate::types::{ChannelId, ChannelSet, FemMode, LineLevels, PinId};

/// Hardware resources the binder works on
///
/// Holds the channel fabric, the pin provider, and the bus provider so
/// that a board (or a test) decides what backs each of them.
pub struct HardwareContext<F, P, B> {
    /// Event channel ownership
    pub fabric: F,
    /// Event-triggered pin outputs
    pub pins: P,
    /// Side-channel bus
    pub bus: B,
}

impl<F, P, B> HardwareContext<F, P, B>
where
    F: ChannelFabric,
    P: PinBinder,
    B: FemBus,
{
    /// Create a new hardware context
    #[must_use]
    pub fn new(fabric: F, pins: P, bus: B) -> Self {
        Self { fabric, pins, bus }
    }
}

/// Control path established by a successful bind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmedInterface {
    chip_select: PinConfig,
    mode: PinConfig,
    channels: ChannelSet<CHANNEL_COUNT>,
    electrical: ElectricalConfig,
    bus_programmed: bool,
}

impl ArmedInterface {
    /// Channel toggling the chip-select line
    #[must_use]
    pub const fn chip_select_channel(&self) -> ChannelId {
        self.channels.chip_select()
    }

    /// Channel toggling the mode line
    #[must_use]
    pub const fn mode_channel(&self) -> ChannelId {
        self.channels.mode()
    }

    /// Channels kept for internal timing use
    #[must_use]
    pub fn internal_channels(&self) -> &[ChannelId] {
        self.channels.internal()
    }

    /// Every channel owned by the interface
    #[must_use]
    pub const fn channels(&self) -> &ChannelSet<CHANNEL_COUNT> {
        &self.channels
    }

    /// Chip-select pin
    #[must_use]
    pub const fn chip_select_pin(&self) -> PinId {
        self.chip_select.pin
    }

    /// Mode pin
    #[must_use]
    pub const fn mode_pin(&self) -> PinId {
        self.mode.pin
    }

    /// Electrical parameters the FEM runs with
    #[must_use]
    pub const fn electrical(&self) -> ElectricalConfig {
        self.electrical
    }

    /// Check if the parameters were written over the bus
    #[must_use]
    pub const fn is_bus_programmed(&self) -> bool {
        self.bus_programmed
    }

    /// Control-line levels the radio stack drives for `mode`
    #[must_use]
    pub const fn line_levels(&self, mode: FemMode) -> LineLevels {
        nrf2220::line_levels(&self.chip_select, &self.mode, mode)
    }

    /// Tear the control path down, releasing pins and channels
    pub fn disarm<F, P, B>(self, ctx: &mut HardwareContext<F, P, B>)
    where
        F: ChannelFabric,
        P: PinBinder,
        B: FemBus,
    {
        ctx.pins.release_pin(self.mode.pin);
        ctx.pins.release_pin(self.chip_select.pin);
        for &id in self.channels.as_slice().iter().rev() {
            ctx.fabric.release_channel(id);
        }
        info!(
            "FEM interface disarmed ({} channels released)",
            self.channels.len()
        );
    }
}

/// Chip-select and mode
const CONTROL_LINES: usize = 2;

/// Resources taken during one bind call; given back on drop unless committed
struct Claims<'a, F, P>
where
    F: ChannelFabric,
    P: PinBinder,
{
    fabric: &'a mut F,
    pins: &'a mut P,
    channels: Vec<ChannelId, CHANNEL_COUNT>,
    bound: Vec<PinId, CONTROL_LINES>,
    committed: bool,
}

impl<'a, F, P> Claims<'a, F, P>
where
    F: ChannelFabric,
    P: PinBinder,
{
    fn new(fabric: &'a mut F, pins: &'a mut P) -> Self {
        Self {
            fabric,
            pins,
            channels: Vec::new(),
            bound: Vec::new(),
            committed: false,
        }
    }

    fn claim(&mut self, id: ChannelId) -> FemResult<()> {
        if !self.fabric.claim_channel(id) {
            return Err(UnavailableReason::ChannelInUse(id).into());
        }
        if self.channels.push(id).is_err() {
            self.fabric.release_channel(id);
            return Err(UnavailableReason::DuplicateChannel(id).into());
        }
        trace!("claimed {}", id);
        Ok(())
    }

    fn bind_line(&mut self, line: &PinConfig, channel: ChannelId) -> FemResult<()> {
        self.claim(channel)?;
        self.pins
            .bind_pin_to_channel(line.pin, channel, PinTask::event_output(line.active_high))?;
        // One entry per control line; bind_line runs once for each
        let pushed = self.bound.push(line.pin);
        debug_assert!(pushed.is_ok(), "more control lines than bound slots");
        trace!("bound {} to {}", line.pin, channel);
        Ok(())
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl<F, P> Drop for Claims<'_, F, P>
where
    F: ChannelFabric,
    P: PinBinder,
{
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        warn!(
            "FEM bind rolled back: {} pins, {} channels",
            self.bound.len(),
            self.channels.len()
        );
        for &pin in self.bound.iter().rev() {
            self.pins.release_pin(pin);
        }
        for &id in self.channels.iter().rev() {
            self.fabric.release_channel(id);
        }
    }
}

/// Validate `config` and arm the FEM control path
///
/// Chip-select is bound to the first channel, mode to the second, the
/// remaining channels are claimed for internal timing use. If a bus
/// instance is configured the electrical parameters are then written over
/// it. On error nothing stays claimed or bound.
///
/// The descriptor must carry exactly [`CHANNEL_COUNT`] channels, the count
/// of the event-routing family selected at build time. Any other length
/// is rejected by the compiler:
///
/// ```compile_fail
/// use fem_nrf2220::prelude::*;
///
/// fn arm<P: PinBinder>(ctx: &mut HardwareContext<ChannelLedger<20>, P, NoBus>) -> i32 {
///     let config = InterfaceConfig::new(
///         PinConfig::new(PinId::new(0, 21)),
///         PinConfig::new(PinId::new(0, 19)),
///         ChannelSet::new([1, 2, 3, 4, 5]),
///     );
///     configure_interface(&config, ctx)
/// }
/// ```
pub fn bind<F, P, B>(
    config: &InterfaceConfig,
    ctx: &mut HardwareContext<F, P, B>,
) -> FemResult<ArmedInterface>
where
    F: ChannelFabric,
    P: PinBinder,
    B: FemBus,
{
    let HardwareContext { fabric, pins, bus } = ctx;

    if let Err(reason) = validator::validate(config, &*fabric) {
        warn!("FEM configuration rejected: {}", reason);
        return Err(FemError::DeviceUnavailable(reason));
    }

    let mut claims = Claims::new(fabric, pins);
    claims.bind_line(&config.chip_select, config.channels.chip_select())?;
    claims.bind_line(&config.mode, config.channels.mode())?;
    for &id in config.channels.internal() {
        claims.claim(id)?;
    }

    let bus_programmed = match config.bus.instance {
        Some(instance) => {
            nrf2220::program(bus, instance, &config.bus, &config.electrical)?;
            true
        }
        None => false,
    };

    claims.commit();
    info!(
        "FEM interface armed: {} channels, bus programmed: {}",
        CHANNEL_COUNT, bus_programmed
    );

    Ok(ArmedInterface {
        chip_select: config.chip_select,
        mode: config.mode,
        channels: config.channels,
        electrical: config.electrical,
        bus_programmed,
    })
}

/// Configure the FEM interface and report a platform status code
///
/// Returns `0` on success, `-NRF_EPERM` when PA/LNA control is not
/// available, `-NRF_EIO` when programming the FEM over the bus failed.
pub fn configure_interface<F, P, B>(
    config: &InterfaceConfig,
    ctx: &mut HardwareContext<F, P, B>,
) -> i32
where
    F: ChannelFabric,
    P: PinBinder,
    B: FemBus,
{
    match bind(config, ctx) {
        Ok(_) => STATUS_SUCCESS,
        Err(err) => err.status_code(),
    }
}
