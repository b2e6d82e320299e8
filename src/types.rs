//! Shared types used across the FEM control interface
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

use core::fmt;

use crate::config::{MIN_CHANNEL_COUNT, PINS_PER_PORT};

/// GPIO pin identifier (port + line number)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinId {
    port: u8,
    pin: u8,
}

impl PinId {
    /// Create a pin identifier from port and line number
    #[must_use]
    pub const fn new(port: u8, pin: u8) -> Self {
        Self { port, pin }
    }

    /// Create from an absolute pin number (`port * 32 + pin`)
    #[must_use]
    pub const fn from_psel(psel: u8) -> Self {
        Self {
            port: psel / PINS_PER_PORT,
            pin: psel % PINS_PER_PORT,
        }
    }

    /// Port number
    #[must_use]
    pub const fn port(self) -> u8 {
        self.port
    }

    /// Line number within the port
    #[must_use]
    pub const fn pin(self) -> u8 {
        self.pin
    }

    /// Absolute pin number as used by the pin-select registers
    #[must_use]
    pub const fn psel(self) -> u8 {
        self.port * PINS_PER_PORT + self.pin
    }
}

impl fmt::Debug for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}.{:02}", self.port, self.pin)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinId {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "P{}.{:02}", self.port, self.pin);
    }
}

/// Logic level of an output line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Level {
    /// Driven low
    #[default]
    Low,
    /// Driven high
    High,
}

impl Level {
    /// Physical level of a line with the given polarity
    #[must_use]
    pub const fn for_state(active_high: bool, asserted: bool) -> Self {
        if active_high == asserted {
            Self::High
        } else {
            Self::Low
        }
    }

    /// Opposite level
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Level {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Low => defmt::write!(f, "LOW"),
            Self::High => defmt::write!(f, "HIGH"),
        }
    }
}

/// Side-channel bus peripheral instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BusInstance(u8);

impl BusInstance {
    /// TWI master instance 0
    pub const TWIM0: Self = Self(0);

    /// TWI master instance 1
    pub const TWIM1: Self = Self(1);

    /// Create from an instance index
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Instance index
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BusInstance {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TWIM{}", self.0);
    }
}

/// Side-channel bus device address
///
/// Stored as given; an 8-bit (shifted) address is caught by the
/// validator rather than truncated here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusAddress(u8);

impl BusAddress {
    /// Highest 7-bit address
    pub const MAX: u8 = 0x7F;

    /// Create from a 7-bit address
    #[must_use]
    pub const fn new(addr: u8) -> Self {
        Self(addr)
    }

    /// Get the raw address
    #[must_use]
    pub const fn addr(self) -> u8 {
        self.0
    }

    /// Check if the address fits in 7 bits
    #[must_use]
    pub const fn is_seven_bit(self) -> bool {
        self.0 <= Self::MAX
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BusAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "0x{:02X}", self.0);
    }
}

/// Event channel identifier on the routing fabric
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelId(u8);

impl ChannelId {
    /// Create a channel identifier
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw channel number
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CH{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChannelId {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "CH{}", self.0);
    }
}

/// Ordered, fixed-length list of event channels handed to one interface
///
/// The length is the channel count of the hardware family. Slot 0 drives
/// the chip-select line, slot 1 drives the mode line, any further slots
/// are kept for the family's internal timing use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelSet<const N: usize> {
    ids: [ChannelId; N],
}

impl<const N: usize> ChannelSet<N> {
    const LEN_CHECK: () = assert!(
        N >= MIN_CHANNEL_COUNT,
        "a FEM interface needs at least the chip-select and mode channels"
    );

    /// Create from raw channel numbers
    #[must_use]
    pub const fn new(ids: [u8; N]) -> Self {
        let () = Self::LEN_CHECK;
        let mut channels = [ChannelId(0); N];
        let mut i = 0;
        while i < N {
            channels[i] = ChannelId(ids[i]);
            i += 1;
        }
        Self { ids: channels }
    }

    /// Channel that toggles the chip-select line
    #[must_use]
    pub const fn chip_select(&self) -> ChannelId {
        self.ids[0]
    }

    /// Channel that toggles the mode line
    #[must_use]
    pub const fn mode(&self) -> ChannelId {
        self.ids[1]
    }

    /// Channels reserved for internal timing use
    #[must_use]
    pub fn internal(&self) -> &[ChannelId] {
        &self.ids[MIN_CHANNEL_COUNT..]
    }

    /// All channels in assignment order
    #[must_use]
    pub const fn as_slice(&self) -> &[ChannelId] {
        &self.ids
    }

    /// Number of channels
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always false; a set holds at least two channels
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// First channel that appears more than once, if any
    #[must_use]
    pub fn first_duplicate(&self) -> Option<ChannelId> {
        self.ids
            .iter()
            .enumerate()
            .find(|&(i, id)| self.ids[..i].contains(id))
            .map(|(_, &id)| id)
    }
}

/// Operating state the FEM is switched between
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FemMode {
    /// Signal passes through with attenuation
    #[default]
    Bypass,
    /// Low-noise amplifier in the receive path
    RxAmplify,
    /// Power amplifier in the transmit path
    TxAmplify,
}

impl FemMode {
    /// Whether chip-select is asserted in this state
    #[must_use]
    pub const fn chip_select_asserted(self) -> bool {
        !matches!(self, Self::Bypass)
    }

    /// Whether the mode line is asserted in this state
    #[must_use]
    pub const fn mode_asserted(self) -> bool {
        matches!(self, Self::TxAmplify)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FemMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Bypass => defmt::write!(f, "BYPASS"),
            Self::RxAmplify => defmt::write!(f, "LNA"),
            Self::TxAmplify => defmt::write!(f, "PA"),
        }
    }
}

/// Control line levels for one FEM state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineLevels {
    /// Chip-select line level
    pub chip_select: Level,
    /// Mode line level
    pub mode: Level,
}
