//! nRF2220 Front-End Module Control Interface
//!
//! This library configures the control path between a radio transceiver
//! and an external nRF2220 PA/LNA front-end module. After a single
//! configuration call at boot, the radio's event fabric switches the FEM
//! between bypass, receive-amplify, and transmit-amplify states with no
//! processor involvement.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    INTERFACE BINDER                          │
//! │  validate  →  claim channels / bind pins  →  program FEM     │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  CONFIGURATION DESCRIPTOR                    │
//! │  Electrical  │  CS / MD pins  │  TWI bus  │  ChannelSet<N>   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     PROVIDER TRAITS                          │
//! │  ChannelFabric  │  PinBinder  │  FemBus (embedded-hal I2C)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use fem_nrf2220::prelude::*;
//! # use fem_nrf2220::hal::pin::{PinError, PinTask};
//! # struct Pins;
//! # impl PinBinder for Pins {
//! #     fn bind_pin_to_channel(&mut self, _: PinId, _: ChannelId, _: PinTask) -> Result<(), PinError> { Ok(()) }
//! #     fn release_pin(&mut self, _: PinId) {}
//! # }
//!
//! let config = InterfaceConfig::new(
//!     PinConfig::new(PinId::new(0, 21)),
//!     PinConfig::new(PinId::new(0, 19)),
//!     ChannelSet::new(channels::ASSIGNMENT),
//! );
//! let mut ctx = HardwareContext::new(ChannelLedger::<20>::new(), Pins, NoBus);
//!
//! assert_eq!(configure_interface(&config, &mut ctx), 0);
//! ```
//!
//! # Design Principles
//!
//! - **All-or-nothing**: a failed configuration leaves no channel claimed
//!   and no pin bound
//! - **Injectable hardware**: channel fabric, pins, and bus are traits
//!   carried in a `HardwareContext`
//! - **Type-driven design**: the channel count is a const generic chosen
//!   by the event-routing family

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// This must go first so the logging macros are visible to every module
mod fmt;

/// Hardware Abstraction Layer
///
/// Channel fabric, pin, and bus provider traits with in-crate providers.
pub mod hal;

/// FEM Control Interface
///
/// Descriptor, validator, binder, and nRF2220 register programming.
pub mod fem;

/// Error types and status codes
pub mod error;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::error::{FemError, FemResult, UnavailableReason};
    pub use crate::fem::binder::{bind, configure_interface, ArmedInterface, HardwareContext};
    pub use crate::fem::descriptor::{BusConfig, ElectricalConfig, InterfaceConfig, PinConfig};
    pub use crate::hal::channel::{ChannelFabric, ChannelLedger};
    pub use crate::hal::i2c::{BusError, FemBus, I2cFemBus, NoBus};
    pub use crate::hal::pin::PinBinder;
    pub use crate::types::*;
}
