//! Descriptor validation
//!
//! Read-only check run before any hardware is touched. Checks are applied
//! in a fixed order and the first failure is reported.

use crate::config::{
    BYPASS_GAIN_MAX_DB, BYPASS_GAIN_MIN_DB, OUTPUT_POWER_MAX_DBM, OUTPUT_POWER_MIN_DBM,
    PERMITTED_BUS_INSTANCE,
};
use crate::error::UnavailableReason;
use crate::fem::descriptor::{BusConfig, ElectricalConfig, InterfaceConfig};
use crate::hal::channel::ChannelFabric;
use crate::hal::i2c::is_supported_frequency;

/// Validate `config` against the current channel ownership in `fabric`
///
/// Order: chip-select enabled, mode enabled, distinct control pins, bus
/// instance, bus frequency, bus address, bus pins, channels distinct and
/// free, electrical ranges.
pub fn validate<F: ChannelFabric + ?Sized>(
    config: &InterfaceConfig,
    fabric: &F,
) -> Result<(), UnavailableReason> {
    if !config.chip_select.enabled {
        return Err(UnavailableReason::ChipSelectDisabled);
    }
    if !config.mode.enabled {
        return Err(UnavailableReason::ModeDisabled);
    }
    if config.chip_select.pin == config.mode.pin {
        return Err(UnavailableReason::ControlPinsShared(config.mode.pin));
    }

    check_bus(config, &config.bus)?;

    if let Some(dup) = config.channels.first_duplicate() {
        return Err(UnavailableReason::DuplicateChannel(dup));
    }
    if let Some(&busy) = config
        .channels
        .as_slice()
        .iter()
        .find(|&&id| !fabric.is_available(id))
    {
        return Err(UnavailableReason::ChannelInUse(busy));
    }

    check_electrical(&config.electrical)
}

fn check_bus(config: &InterfaceConfig, bus: &BusConfig) -> Result<(), UnavailableReason> {
    let Some(instance) = bus.instance else {
        return Ok(());
    };
    if instance != PERMITTED_BUS_INSTANCE {
        return Err(UnavailableReason::UnsupportedBusInstance);
    }
    if !is_supported_frequency(bus.frequency_hz) {
        return Err(UnavailableReason::UnsupportedBusFrequency(bus.frequency_hz));
    }
    if !bus.device_address.is_seven_bit() {
        return Err(UnavailableReason::InvalidBusAddress(
            bus.device_address.addr(),
        ));
    }

    let control = [config.chip_select.pin, config.mode.pin];
    if bus.clock_pin == bus.data_pin {
        return Err(UnavailableReason::BusPinConflict(bus.data_pin));
    }
    for pin in [bus.clock_pin, bus.data_pin] {
        if control.contains(&pin) {
            return Err(UnavailableReason::BusPinConflict(pin));
        }
    }
    Ok(())
}

/// Check electrical parameters against the device's supported range
pub fn check_electrical(electrical: &ElectricalConfig) -> Result<(), UnavailableReason> {
    if !(OUTPUT_POWER_MIN_DBM..=OUTPUT_POWER_MAX_DBM).contains(&electrical.output_power_dbm) {
        return Err(UnavailableReason::OutputPowerOutOfRange(
            electrical.output_power_dbm,
        ));
    }
    if !(BYPASS_GAIN_MIN_DB..=BYPASS_GAIN_MAX_DB).contains(&electrical.bypass_gain_db) {
        return Err(UnavailableReason::BypassGainOutOfRange(
            electrical.bypass_gain_db,
        ));
    }
    Ok(())
}
