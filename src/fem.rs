//! FEM Control Interface
//!
//! Descriptor, validation, and binding of the nRF2220 front-end module
//! control path. The radio stack drives the armed interface afterwards;
//! nothing here runs per packet.

pub mod binder;
pub mod descriptor;
pub mod nrf2220;
pub mod validator;
