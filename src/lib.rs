//! Device controller library.
//!
//! Boots a sensor device with bounded retries, gates commands on readiness
//! and dispatches motion/contact queries by declared capability.  The
//! hardware is reached only through the traits in [`app::ports`]; the
//! [`sensors`] module ships simulated variants for host builds and tests.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod sensors;

pub use app::controller::{ControllerState, DeviceController};
pub use error::{Error, HardwareError, Result};
