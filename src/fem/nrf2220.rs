//! nRF2220 register programming and control-line truth table
//!
//! The FEM exposes two parameter registers on its TWI port: the PA output
//! power and the bypass attenuation. They sit at consecutive addresses and
//! are written as one auto-incrementing burst, output power first, so the
//! device never holds one new value next to one stale one.

use crate::fem::descriptor::{BusConfig, ElectricalConfig, PinConfig};
use crate::hal::i2c::{BusResult, FemBus};
use crate::types::{BusInstance, FemMode, Level, LineLevels};

/// nRF2220 register addresses
pub mod reg {
    /// PA output power in dBm
    pub const CONFREG0: u8 = 0x00;
    /// Bypass attenuation in dB (magnitude)
    pub const CONFREG1: u8 = 0x01;
}

/// Number of parameter registers
pub const REGISTER_COUNT: usize = 2;

/// Register value for the PA output power
#[must_use]
pub const fn output_power_code(electrical: &ElectricalConfig) -> u8 {
    electrical.output_power_dbm.unsigned_abs()
}

/// Register value for the bypass attenuation
#[must_use]
pub const fn bypass_attenuation_code(electrical: &ElectricalConfig) -> u8 {
    electrical.bypass_gain_db.unsigned_abs()
}

/// Register values in address order, starting at `CONFREG0`
#[must_use]
pub const fn stage_parameters(electrical: &ElectricalConfig) -> [u8; REGISTER_COUNT] {
    [
        output_power_code(electrical),
        bypass_attenuation_code(electrical),
    ]
}

/// Open a session on `instance` and write the electrical parameters
///
/// The session is closed whether or not the writes succeed.
pub fn program<B: FemBus + ?Sized>(
    bus: &mut B,
    instance: BusInstance,
    config: &BusConfig,
    electrical: &ElectricalConfig,
) -> BusResult<()> {
    let session = bus.open_session(instance, config.frequency_hz, config.device_address)?;
    debug!(
        "FEM bus session: {} @ {} Hz, addr {}",
        instance,
        config.frequency_hz,
        config.device_address
    );

    let values = stage_parameters(electrical);
    let result = bus.write_registers(&session, reg::CONFREG0, &values);
    if result.is_ok() {
        debug!(
            "CONFREG0 <- 0x{:02X}, CONFREG1 <- 0x{:02X}",
            values[0],
            values[1]
        );
    }
    bus.close_session(session);
    result
}

/// Physical control-line levels for `mode`
#[must_use]
pub const fn line_levels(chip_select: &PinConfig, mode_pin: &PinConfig, mode: FemMode) -> LineLevels {
    LineLevels {
        chip_select: Level::for_state(chip_select.active_high, mode.chip_select_asserted()),
        mode: Level::for_state(mode_pin.active_high, mode.mode_asserted()),
    }
}
