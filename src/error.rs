//! Error types for FEM interface configuration
//!
//! Every failure collapses to one of two kinds: the interface is not
//! available (validation or resource conflicts), or the side-channel bus
//! failed while programming the FEM. Each kind maps to one negative
//! platform status code.

use core::fmt;

use crate::config::{NRF_EIO, NRF_EPERM};
use crate::hal::i2c::BusError;
use crate::hal::pin::PinError;
use crate::types::{ChannelId, PinId};

/// Why the interface cannot be made available
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UnavailableReason {
    /// Chip-select pin is not enabled
    ChipSelectDisabled,
    /// Mode pin is not enabled
    ModeDisabled,
    /// Chip-select and mode refer to the same pin
    ControlPinsShared(PinId),
    /// Bus instance is not the one wired to the FEM
    UnsupportedBusInstance,
    /// Bus clock frequency the master cannot generate
    UnsupportedBusFrequency(u32),
    /// Device address does not fit in 7 bits
    InvalidBusAddress(u8),
    /// A bus pin collides with another interface pin
    BusPinConflict(PinId),
    /// The same channel is listed twice
    DuplicateChannel(ChannelId),
    /// A channel is owned by another consumer
    ChannelInUse(ChannelId),
    /// Output power outside the supported range
    OutputPowerOutOfRange(i8),
    /// Bypass gain outside the supported range
    BypassGainOutOfRange(i8),
    /// The pin provider refused to bind a control pin
    PinBindFailed(PinError),
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChipSelectDisabled => write!(f, "chip-select pin disabled"),
            Self::ModeDisabled => write!(f, "mode pin disabled"),
            Self::ControlPinsShared(pin) => write!(f, "control pins share {pin:?}"),
            Self::UnsupportedBusInstance => write!(f, "bus instance not wired to the FEM"),
            Self::UnsupportedBusFrequency(hz) => write!(f, "bus frequency {hz} Hz unsupported"),
            Self::InvalidBusAddress(addr) => write!(f, "bus address 0x{addr:02X} is not 7-bit"),
            Self::BusPinConflict(pin) => write!(f, "bus pin {pin:?} already used"),
            Self::DuplicateChannel(ch) => write!(f, "{ch:?} listed twice"),
            Self::ChannelInUse(ch) => write!(f, "{ch:?} already claimed"),
            Self::OutputPowerOutOfRange(dbm) => write!(f, "output power {dbm} dBm unsupported"),
            Self::BypassGainOutOfRange(db) => write!(f, "bypass gain {db} dB unsupported"),
            Self::PinBindFailed(err) => write!(f, "pin bind failed: {err:?}"),
        }
    }
}

/// FEM interface configuration error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FemError {
    /// PA/LNA control is not available
    DeviceUnavailable(UnavailableReason),
    /// A side-channel bus transaction failed
    BusTransactionFailed(BusError),
}

impl FemError {
    /// Signed status code: `-NRF_EPERM` or `-NRF_EIO`
    #[must_use]
    pub const fn status_code(&self) -> i32 {
        match self {
            Self::DeviceUnavailable(_) => -NRF_EPERM,
            Self::BusTransactionFailed(_) => -NRF_EIO,
        }
    }

    /// Check if this is an availability failure
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::DeviceUnavailable(_))
    }
}

impl fmt::Display for FemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceUnavailable(reason) => write!(f, "PA/LNA not available: {reason}"),
            Self::BusTransactionFailed(err) => write!(f, "FEM bus transaction failed: {err:?}"),
        }
    }
}

impl From<UnavailableReason> for FemError {
    fn from(reason: UnavailableReason) -> Self {
        Self::DeviceUnavailable(reason)
    }
}

impl From<BusError> for FemError {
    fn from(err: BusError) -> Self {
        Self::BusTransactionFailed(err)
    }
}

impl From<PinError> for FemError {
    fn from(err: PinError) -> Self {
        Self::DeviceUnavailable(UnavailableReason::PinBindFailed(err))
    }
}

/// FEM configuration result
pub type FemResult<T> = Result<T, FemError>;
