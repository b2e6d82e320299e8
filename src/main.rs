//! FEM Bring-up Application
//!
//! Entry point for the nRF52840 + nRF2220 bring-up firmware.
//! Configures the FEM control interface once at boot and reports the result.

#![no_std]
#![no_main]

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_nrf::{bind_interrupts, peripherals, twim};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use fem_nrf2220::hal::gpiote::GpioteBinder;
use fem_nrf2220::prelude::*;

// Bind interrupt handlers
bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Board FEM descriptor
const FEM_CONFIG: InterfaceConfig = InterfaceConfig::new(
    PinConfig::new(pins::FEM_CS),
    PinConfig::new(pins::FEM_MD),
    ChannelSet::new(channels::ASSIGNMENT),
)
.with_bus(BusConfig::new(
    PERMITTED_BUS_INSTANCE,
    pins::FEM_SCL,
    pins::FEM_SDA,
    DEFAULT_BUS_FREQUENCY_HZ,
    FEM_BUS_ADDRESS,
))
.with_electrical(ElectricalConfig::new(
    DEFAULT_OUTPUT_POWER_DBM,
    DEFAULT_BYPASS_GAIN_DB,
));

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("FEM bring-up firmware v{}", env!("CARGO_PKG_VERSION"));

    let p = embassy_nrf::init(Default::default());

    // TWIM0 at 100kHz, FEM is the only device on the bus
    let mut twim_config = twim::Config::default();
    twim_config.frequency = twim::Frequency::K100;
    let twi = twim::Twim::new(p.TWISPI0, Irqs, p.P1_03, p.P1_02, twim_config);

    let mut ctx = HardwareContext::new(
        ChannelLedger::<FABRIC_CHANNELS>::new(),
        GpioteBinder::new(),
        I2cFemBus::new(twi, PERMITTED_BUS_INSTANCE, DEFAULT_BUS_FREQUENCY_HZ),
    );

    match bind(&FEM_CONFIG, &mut ctx) {
        Ok(fem) => {
            info!(
                "PA/LNA armed: CS on {}, MD on {}",
                fem.chip_select_channel(),
                fem.mode_channel()
            );
            for mode in [FemMode::Bypass, FemMode::RxAmplify, FemMode::TxAmplify] {
                let levels = fem.line_levels(mode);
                info!("  {}: CS={} MD={}", mode, levels.chip_select, levels.mode);
            }
        }
        Err(err) => {
            error!("PA/LNA control unavailable ({}): {}", err.status_code(), err);
        }
    }

    loop {
        Timer::after(Duration::from_secs(10)).await;
        info!("Main loop tick");
    }
}
