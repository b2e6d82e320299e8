//! Hardware Abstraction Layer
//!
//! Provider traits the interface binder is written against, plus the
//! in-crate providers: the channel ownership ledger, the TWI bus adapter,
//! and (on target) the GPIOTE/PPI pin binder.

pub mod channel;
#[cfg(feature = "embedded")]
pub mod gpiote;
pub mod i2c;
pub mod pin;
