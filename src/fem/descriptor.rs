//! Interface configuration descriptor
//!
//! Plain data built by the board (usually as a `const`) and consumed by a
//! single binder call. Nothing here validates itself; the binder does.

use crate::config::{
    CHANNEL_COUNT, DEFAULT_BUS_FREQUENCY_HZ, DEFAULT_BYPASS_GAIN_DB, DEFAULT_OUTPUT_POWER_DBM,
};
use crate::types::{BusAddress, BusInstance, ChannelSet, PinId};

/// FEM electrical parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElectricalConfig {
    /// Output power of the PA in dBm
    pub output_power_dbm: i8,
    /// Gain of the bypass path in dB, usually negative (attenuation)
    pub bypass_gain_db: i8,
}

impl ElectricalConfig {
    /// Create from output power and bypass gain
    #[must_use]
    pub const fn new(output_power_dbm: i8, bypass_gain_db: i8) -> Self {
        Self {
            output_power_dbm,
            bypass_gain_db,
        }
    }
}

impl Default for ElectricalConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_POWER_DBM, DEFAULT_BYPASS_GAIN_DB)
    }
}

/// Control pin configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// Pin takes part in the interface
    pub enabled: bool,
    /// GPIO line
    pub pin: PinId,
    /// Line is asserted when driven high
    pub active_high: bool,
}

impl PinConfig {
    /// Enabled, active-high pin
    #[must_use]
    pub const fn new(pin: PinId) -> Self {
        Self {
            enabled: true,
            pin,
            active_high: true,
        }
    }

    /// Disabled pin
    #[must_use]
    pub const fn disabled(pin: PinId) -> Self {
        Self {
            enabled: false,
            pin,
            active_high: true,
        }
    }

    /// Same pin, asserted when driven low
    #[must_use]
    pub const fn active_low(self) -> Self {
        Self {
            active_high: false,
            ..self
        }
    }
}

/// Side-channel bus configuration
///
/// With `instance` set to `None` no bus traffic happens and only the
/// GPIO half of the interface is set up. The FEM must be the only device
/// on the bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusConfig {
    /// Bus peripheral, or `None` for a GPIO-only interface
    pub instance: Option<BusInstance>,
    /// Clock (SCL) pin
    pub clock_pin: PinId,
    /// Data (SDA) pin
    pub data_pin: PinId,
    /// Clock frequency in Hz
    pub frequency_hz: u32,
    /// FEM slave address
    pub device_address: BusAddress,
}

impl BusConfig {
    /// Bus on `instance`
    #[must_use]
    pub const fn new(
        instance: BusInstance,
        clock_pin: PinId,
        data_pin: PinId,
        frequency_hz: u32,
        device_address: u8,
    ) -> Self {
        Self {
            instance: Some(instance),
            clock_pin,
            data_pin,
            frequency_hz,
            device_address: BusAddress::new(device_address),
        }
    }

    /// No bus; GPIO-only interface
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            instance: None,
            clock_pin: PinId::new(0, 0),
            data_pin: PinId::new(0, 0),
            frequency_hz: DEFAULT_BUS_FREQUENCY_HZ,
            device_address: BusAddress::new(0),
        }
    }

    /// Check if a bus instance is configured
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.instance.is_some()
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::absent()
    }
}

/// Complete interface descriptor
///
/// `N` is the channel count of the event-routing family and defaults to
/// the one selected at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterfaceConfig<const N: usize = CHANNEL_COUNT> {
    /// FEM electrical parameters
    pub electrical: ElectricalConfig,
    /// Chip-select line
    pub chip_select: PinConfig,
    /// Mode line
    pub mode: PinConfig,
    /// Side-channel bus
    pub bus: BusConfig,
    /// Event channels, chip-select first, mode second
    pub channels: ChannelSet<N>,
}

impl<const N: usize> InterfaceConfig<N> {
    /// GPIO-only interface with default electrical parameters
    #[must_use]
    pub const fn new(chip_select: PinConfig, mode: PinConfig, channels: ChannelSet<N>) -> Self {
        Self {
            electrical: ElectricalConfig::new(DEFAULT_OUTPUT_POWER_DBM, DEFAULT_BYPASS_GAIN_DB),
            chip_select,
            mode,
            bus: BusConfig::absent(),
            channels,
        }
    }

    /// Same descriptor with a side-channel bus
    #[must_use]
    pub const fn with_bus(self, bus: BusConfig) -> Self {
        Self { bus, ..self }
    }

    /// Same descriptor on other event channels
    #[must_use]
    pub const fn with_channels(self, channels: ChannelSet<N>) -> Self {
        Self { channels, ..self }
    }

    /// Same descriptor with other electrical parameters
    #[must_use]
    pub const fn with_electrical(self, electrical: ElectricalConfig) -> Self {
        Self { electrical, ..self }
    }
}
