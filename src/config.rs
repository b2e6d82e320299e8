//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the FEM control interface.
//! The event-routing family, the permitted side-channel bus instance,
//! status codes, and supported electrical ranges are centralized here.

use crate::types::BusInstance;

/// Number of event channels one FEM interface consumes.
///
/// The older event-routing fabric (PPI) needs three channels, the newer
/// one (DPPI) needs two.
#[cfg(feature = "ppi")]
pub const CHANNEL_COUNT: usize = 3;

/// Number of event channels one FEM interface consumes.
///
/// The older event-routing fabric (PPI) needs three channels, the newer
/// one (DPPI) needs two.
#[cfg(not(feature = "ppi"))]
pub const CHANNEL_COUNT: usize = 2;

/// Minimum channel count any family can be bound with
/// (chip-select channel + mode channel)
pub const MIN_CHANNEL_COUNT: usize = 2;

/// Event channels available on the fabric of the bring-up target
pub const FABRIC_CHANNELS: usize = 20;

/// The only bus instance wired to the FEM on this hardware family
pub const PERMITTED_BUS_INSTANCE: BusInstance = BusInstance::TWIM0;

/// Platform error number for "operation not permitted"
pub const NRF_EPERM: i32 = 1;

/// Platform error number for "I/O error"
pub const NRF_EIO: i32 = 5;

/// Status returned by a successful configuration call
pub const STATUS_SUCCESS: i32 = 0;

/// Bus clock frequencies the TWI master can generate
pub const SUPPORTED_BUS_FREQUENCIES_HZ: [u32; 3] = [100_000, 250_000, 400_000];

/// Default bus clock frequency
pub const DEFAULT_BUS_FREQUENCY_HZ: u32 = 100_000;

/// Lowest output power the FEM can be programmed to
pub const OUTPUT_POWER_MIN_DBM: i8 = 0;

/// Highest output power the FEM can be programmed to
pub const OUTPUT_POWER_MAX_DBM: i8 = 20;

/// Strongest bypass attenuation (as a gain)
pub const BYPASS_GAIN_MIN_DB: i8 = -20;

/// Weakest bypass attenuation (as a gain)
pub const BYPASS_GAIN_MAX_DB: i8 = 0;

/// Default output power
pub const DEFAULT_OUTPUT_POWER_DBM: i8 = 10;

/// Default bypass gain
pub const DEFAULT_BYPASS_GAIN_DB: i8 = -1;

/// GPIO lines per port
pub const PINS_PER_PORT: u8 = 32;

/// Number of GPIO ports
pub const GPIO_PORTS: u8 = 2;

/// Pin assignments for the bring-up board
pub mod pins {
    //! GPIO pin assignments matching the FEM shield schematic

    use crate::types::PinId;

    /// FEM chip-select line
    pub const FEM_CS: PinId = PinId::new(0, 21);

    /// FEM mode line
    pub const FEM_MD: PinId = PinId::new(0, 19);

    /// TWI SCL to the FEM
    pub const FEM_SCL: PinId = PinId::new(1, 2);

    /// TWI SDA to the FEM
    pub const FEM_SDA: PinId = PinId::new(1, 3);
}

/// Event channel assignments for the bring-up board
pub mod channels {
    //! Event channels handed to the FEM interface

    /// Chip-select toggle channel
    pub const CS: u8 = 8;

    /// Mode toggle channel
    pub const MD: u8 = 9;

    /// Internal timing channel (older fabric only)
    pub const INTERNAL: u8 = 10;

    /// Channel set handed to the FEM interface
    #[cfg(feature = "ppi")]
    pub const ASSIGNMENT: [u8; super::CHANNEL_COUNT] = [CS, MD, INTERNAL];

    /// Channel set handed to the FEM interface
    #[cfg(not(feature = "ppi"))]
    pub const ASSIGNMENT: [u8; super::CHANNEL_COUNT] = [CS, MD];
}

/// GPIOTE task slots for the bring-up board
pub mod gpiote {
    //! GPIOTE task slot assignments

    /// First GPIOTE task slot handed to the FEM pin binder
    pub const FIRST_TASK: u8 = 4;

    /// Number of GPIOTE task slots on the target
    pub const TASK_SLOTS: u8 = 8;
}

/// FEM TWI slave address on the bring-up board
pub const FEM_BUS_ADDRESS: u8 = 0x36;
