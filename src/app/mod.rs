//! Application core: controller logic, zero direct I/O.
//!
//! The [`controller`] drives hardware exclusively through the **port
//! traits** in [`ports`], so it runs unchanged against real firmware,
//! the simulated sensors, or a test double.

pub mod commands;
pub mod controller;
pub mod ports;
