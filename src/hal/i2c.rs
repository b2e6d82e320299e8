//! Side-Channel Bus (TWI) Abstractions
//!
//! The FEM's gain/power registers are programmed over a TWI bus during
//! initialization. The binder sees the bus as a session-oriented
//! register writer; `I2cFemBus` provides that on top of any blocking
//! `embedded-hal` I2C master.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

use crate::config::SUPPORTED_BUS_FREQUENCIES_HZ;
use crate::types::{BusAddress, BusInstance};

/// Bus provider failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// No bus is wired on this board
    NotPresent,
    /// Session requested on an instance this provider does not drive
    WrongInstance,
    /// Clock frequency the master cannot generate
    UnsupportedFrequency(u32),
    /// Device did not acknowledge
    Nack,
    /// Arbitration lost or bus error
    Bus,
    /// Burst longer than the provider can send in one transfer
    BurstTooLong,
    /// Any other transfer failure
    Transfer,
}

impl BusError {
    fn from_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(_) => Self::Nack,
            ErrorKind::ArbitrationLoss | ErrorKind::Bus => Self::Bus,
            _ => Self::Transfer,
        }
    }
}

/// Bus operation result
pub type BusResult<T> = Result<T, BusError>;

/// Open session with one device on one bus instance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusSession {
    /// Bus instance carrying the session
    pub instance: BusInstance,
    /// Clock frequency in Hz
    pub frequency_hz: u32,
    /// Device address
    pub address: BusAddress,
}

/// Register write capability over the side-channel bus
pub trait FemBus {
    /// Open a session with `address` at `frequency_hz`
    fn open_session(
        &mut self,
        instance: BusInstance,
        frequency_hz: u32,
        address: BusAddress,
    ) -> BusResult<BusSession>;

    /// Write a single register
    fn write_register(&mut self, session: &BusSession, reg: u8, value: u8) -> BusResult<()>;

    /// Write `values` to consecutive registers from `first_reg` in one
    /// transfer
    ///
    /// The device takes every byte or none of them; a provider that cannot
    /// send the burst in one transfer must fail without writing.
    fn write_registers(
        &mut self,
        session: &BusSession,
        first_reg: u8,
        values: &[u8],
    ) -> BusResult<()>;

    /// Close a session
    fn close_session(&mut self, _session: BusSession) {}
}

/// Bus provider for boards without a FEM bus
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBus;

impl FemBus for NoBus {
    fn open_session(
        &mut self,
        _instance: BusInstance,
        _frequency_hz: u32,
        _address: BusAddress,
    ) -> BusResult<BusSession> {
        Err(BusError::NotPresent)
    }

    fn write_register(&mut self, _session: &BusSession, _reg: u8, _value: u8) -> BusResult<()> {
        Err(BusError::NotPresent)
    }

    fn write_registers(
        &mut self,
        _session: &BusSession,
        _first_reg: u8,
        _values: &[u8],
    ) -> BusResult<()> {
        Err(BusError::NotPresent)
    }
}

/// Check if the TWI master can generate `frequency_hz`
#[must_use]
pub fn is_supported_frequency(frequency_hz: u32) -> bool {
    SUPPORTED_BUS_FREQUENCIES_HZ.contains(&frequency_hz)
}

/// Longest register burst `I2cFemBus` sends in one transfer
pub const MAX_BURST: usize = 16;

/// FEM bus over a blocking I2C master
///
/// The master is already clocked; the adapter remembers which instance
/// and frequency it was set up with and refuses sessions for others.
pub struct I2cFemBus<I> {
    i2c: I,
    instance: BusInstance,
    frequency_hz: u32,
}

impl<I: I2c> I2cFemBus<I> {
    /// Create a new FEM bus wrapper
    #[must_use]
    pub fn new(i2c: I, instance: BusInstance, frequency_hz: u32) -> Self {
        Self {
            i2c,
            instance,
            frequency_hz,
        }
    }

    /// Bus instance driven by this adapter
    #[must_use]
    pub const fn instance(&self) -> BusInstance {
        self.instance
    }

    /// Release the underlying master
    pub fn into_inner(self) -> I {
        self.i2c
    }

    /// Read a single register
    pub fn read_register(&mut self, session: &BusSession, reg: u8) -> BusResult<u8> {
        let mut buf = [0u8];
        self.i2c
            .write_read(session.address.addr(), &[reg], &mut buf)
            .map_err(|e| BusError::from_kind(e.kind()))?;
        Ok(buf[0])
    }
}

impl<I: I2c> FemBus for I2cFemBus<I> {
    fn open_session(
        &mut self,
        instance: BusInstance,
        frequency_hz: u32,
        address: BusAddress,
    ) -> BusResult<BusSession> {
        if instance != self.instance {
            return Err(BusError::WrongInstance);
        }
        if !is_supported_frequency(frequency_hz) || frequency_hz != self.frequency_hz {
            return Err(BusError::UnsupportedFrequency(frequency_hz));
        }

        Ok(BusSession {
            instance,
            frequency_hz,
            address,
        })
    }

    fn write_register(&mut self, session: &BusSession, reg: u8, value: u8) -> BusResult<()> {
        self.i2c
            .write(session.address.addr(), &[reg, value])
            .map_err(|e| BusError::from_kind(e.kind()))
    }

    fn write_registers(
        &mut self,
        session: &BusSession,
        first_reg: u8,
        values: &[u8],
    ) -> BusResult<()> {
        if values.len() > MAX_BURST {
            return Err(BusError::BurstTooLong);
        }

        // Register address prefix, then values; the device auto-increments
        let mut buf = [0u8; MAX_BURST + 1];
        buf[0] = first_reg;
        buf[1..=values.len()].copy_from_slice(values);
        self.i2c
            .write(session.address.addr(), &buf[..=values.len()])
            .map_err(|e| BusError::from_kind(e.kind()))
    }
}
