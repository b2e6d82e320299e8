//! Deterministic hardware fakes shared by the integration tests

#![allow(dead_code)]

use embedded_hal::i2c::{self, ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

use fem_nrf2220::config::CHANNEL_COUNT;
use fem_nrf2220::fem::descriptor::{BusConfig, InterfaceConfig, PinConfig};
use fem_nrf2220::hal::channel::ChannelLedger;
use fem_nrf2220::hal::i2c::{BusError, BusResult, BusSession, FemBus};
use fem_nrf2220::hal::pin::{PinBinder, PinError, PinTask};
use fem_nrf2220::fem::binder::HardwareContext;
use fem_nrf2220::types::{BusAddress, BusInstance, ChannelId, ChannelSet, PinId};

/// Fabric size used by the tests
pub const TEST_FABRIC: usize = 16;

pub const CS_PIN: PinId = PinId::new(0, 21);
pub const MD_PIN: PinId = PinId::new(0, 19);
pub const SCL_PIN: PinId = PinId::new(1, 2);
pub const SDA_PIN: PinId = PinId::new(1, 3);

/// Channels handed to the interface on the older fabric
#[cfg(feature = "ppi")]
pub const CHANNELS: [u8; CHANNEL_COUNT] = [1, 2, 3];

/// Channels handed to the interface on the newer fabric
#[cfg(not(feature = "ppi"))]
pub const CHANNELS: [u8; CHANNEL_COUNT] = [1, 2];

// =============================================================================
// Pin provider
// =============================================================================

/// Pin binder that records every call
#[derive(Default)]
pub struct RecordingPins {
    pub bound: Vec<(PinId, ChannelId, PinTask)>,
    pub released: Vec<PinId>,
    pub fail_on: Option<PinId>,
}

impl RecordingPins {
    pub fn failing_on(pin: PinId) -> Self {
        Self {
            fail_on: Some(pin),
            ..Self::default()
        }
    }

    /// Pins currently bound (bound and not released since)
    pub fn active(&self) -> Vec<PinId> {
        let mut active: Vec<PinId> = Vec::new();
        for (pin, _, _) in &self.bound {
            active.push(*pin);
        }
        for pin in &self.released {
            if let Some(i) = active.iter().position(|p| p == pin) {
                active.remove(i);
            }
        }
        active
    }
}

impl PinBinder for RecordingPins {
    fn bind_pin_to_channel(
        &mut self,
        pin: PinId,
        channel: ChannelId,
        mode: PinTask,
    ) -> Result<(), PinError> {
        if self.fail_on == Some(pin) {
            return Err(PinError::PinBusy);
        }
        self.bound.push((pin, channel, mode));
        Ok(())
    }

    fn release_pin(&mut self, pin: PinId) {
        self.released.push(pin);
    }
}

// =============================================================================
// Bus provider
// =============================================================================

/// Bus provider that records sessions and register writes
///
/// `writes` holds what the device accepted, one entry per register. A
/// burst touching `fail_on_reg` is refused whole.
#[derive(Default)]
pub struct RecordingBus {
    pub sessions: Vec<BusSession>,
    pub writes: Vec<(u8, u8)>,
    pub bursts: usize,
    pub closed: usize,
    pub attempted_writes: usize,
    pub fail_open: bool,
    pub fail_on_reg: Option<u8>,
}

impl RecordingBus {
    pub fn failing_on_reg(reg: u8) -> Self {
        Self {
            fail_on_reg: Some(reg),
            ..Self::default()
        }
    }

    pub fn failing_open() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    pub fn was_touched(&self) -> bool {
        !self.sessions.is_empty() || self.attempted_writes > 0
    }
}

impl FemBus for RecordingBus {
    fn open_session(
        &mut self,
        instance: BusInstance,
        frequency_hz: u32,
        address: BusAddress,
    ) -> BusResult<BusSession> {
        if self.fail_open {
            return Err(BusError::Bus);
        }
        let session = BusSession {
            instance,
            frequency_hz,
            address,
        };
        self.sessions.push(session);
        Ok(session)
    }

    fn write_register(&mut self, _session: &BusSession, reg: u8, value: u8) -> BusResult<()> {
        self.attempted_writes += 1;
        if self.fail_on_reg == Some(reg) {
            return Err(BusError::Nack);
        }
        self.writes.push((reg, value));
        Ok(())
    }

    fn write_registers(
        &mut self,
        _session: &BusSession,
        first_reg: u8,
        values: &[u8],
    ) -> BusResult<()> {
        self.attempted_writes += 1;
        let regs = (first_reg..).take(values.len());
        if regs.clone().any(|reg| self.fail_on_reg == Some(reg)) {
            return Err(BusError::Nack);
        }
        self.bursts += 1;
        self.writes.extend(regs.zip(values.iter().copied()));
        Ok(())
    }

    fn close_session(&mut self, _session: BusSession) {
        self.closed += 1;
    }
}

// =============================================================================
// Blocking I2C master
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeI2cError(pub ErrorKind);

impl i2c::Error for FakeI2cError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

/// I2C master with a 256-byte register file behind one device address
pub struct FakeI2c {
    pub device: u8,
    pub regs: [u8; 256],
    pub frames: Vec<(u8, Vec<u8>)>,
    pub fail: Option<ErrorKind>,
}

impl FakeI2c {
    pub fn new(device: u8) -> Self {
        Self {
            device,
            regs: [0; 256],
            frames: Vec::new(),
            fail: None,
        }
    }
}

impl ErrorType for FakeI2c {
    type Error = FakeI2cError;
}

impl i2c::I2c for FakeI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if let Some(kind) = self.fail {
            return Err(FakeI2cError(kind));
        }
        if address != self.device {
            return Err(FakeI2cError(ErrorKind::NoAcknowledge(
                NoAcknowledgeSource::Address,
            )));
        }

        let mut pointer = 0usize;
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    self.frames.push((address, bytes.to_vec()));
                    if let Some((&reg, values)) = bytes.split_first() {
                        pointer = usize::from(reg);
                        for (i, &v) in values.iter().enumerate() {
                            self.regs[(pointer + i) % 256] = v;
                        }
                    }
                }
                Operation::Read(buf) => {
                    for (i, b) in buf.iter_mut().enumerate() {
                        *b = self.regs[(pointer + i) % 256];
                    }
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// Descriptors and contexts
// =============================================================================

pub type TestContext = HardwareContext<ChannelLedger<TEST_FABRIC>, RecordingPins, RecordingBus>;

pub fn context() -> TestContext {
    HardwareContext::new(
        ChannelLedger::new(),
        RecordingPins::default(),
        RecordingBus::default(),
    )
}

pub fn context_with(pins: RecordingPins, bus: RecordingBus) -> TestContext {
    HardwareContext::new(ChannelLedger::new(), pins, bus)
}

/// Channel set of consecutive ids starting at `first`
pub fn channel_run(first: u8) -> ChannelSet<CHANNEL_COUNT> {
    let mut ids = [0u8; CHANNEL_COUNT];
    for (id, next) in ids.iter_mut().zip(first..) {
        *id = next;
    }
    ChannelSet::new(ids)
}

/// GPIO-only descriptor on `CHANNELS`
pub fn gpio_only() -> InterfaceConfig {
    InterfaceConfig::new(
        PinConfig::new(CS_PIN),
        PinConfig::new(MD_PIN),
        ChannelSet::new(CHANNELS),
    )
}

/// Descriptor with the permitted bus at 100 kHz, address 0x5C
pub fn with_bus() -> InterfaceConfig {
    gpio_only().with_bus(BusConfig::new(
        BusInstance::TWIM0,
        SCL_PIN,
        SDA_PIN,
        100_000,
        0x5C,
    ))
}

pub fn claimed(ctx: &TestContext) -> Vec<u8> {
    ctx.fabric.claimed().map(ChannelId::index).collect()
}
