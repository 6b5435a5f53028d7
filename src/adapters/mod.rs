//! Adapters: concrete implementations of the controller's injected ports.
//!
//! | Adapter   | Implements | Connects to                  |
//! |-----------|------------|------------------------------|
//! | `time`    | `DelayNs`  | `std::thread::sleep` / sim   |
//!
//! Hardware adapters live in [`crate::sensors`].

pub mod time;
