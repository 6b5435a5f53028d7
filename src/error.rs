//! Unified error types for the device controller.
//!
//! A single `Error` enum that every layer converts into, so callers can
//! match on distinguishable failure kinds without downcasting.  All
//! variants are `Copy`; nothing here allocates.

use core::fmt;

use crate::app::commands::COMMAND_CAPACITY;
use crate::app::ports::Capability;

// ---------------------------------------------------------------------------
// Top-level controller error
// ---------------------------------------------------------------------------

/// Every fallible controller or sensor operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The boot retry budget ran out before the hardware reported ready.
    BootTimeout { attempts: u32 },
    /// A command was attempted before a successful boot (or after shutdown).
    NotReady,
    /// A sensor-specific operation was invoked on hardware lacking the
    /// required capability.
    WrongDeviceType {
        expected: Capability,
        found: Capability,
    },
    /// The hardware reported a sensor value outside its enumeration.
    InvalidDeviceState,
    /// Contact state text was neither `OPEN` nor `CLOSED`.
    InvalidContactState,
    /// Command text does not fit the bounded command buffer.
    CommandTooLong,
    /// The hardware rejected an operation.
    Hardware(HardwareError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BootTimeout { attempts } => {
                write!(f, "device failed to boot within {attempts} attempts")
            }
            Self::NotReady => write!(f, "device is not ready"),
            Self::WrongDeviceType { expected, found } => {
                write!(f, "operation requires {expected} capability, device is {found}")
            }
            Self::InvalidDeviceState => write!(f, "device reported an invalid sensor state"),
            Self::InvalidContactState => {
                write!(f, "contact state must be either 'OPEN' or 'CLOSED'")
            }
            Self::CommandTooLong => write!(f, "command exceeds {COMMAND_CAPACITY} bytes"),
            Self::Hardware(e) => write!(f, "hardware: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Hardware errors
// ---------------------------------------------------------------------------

/// Failures reported by a [`HardwareInterface`](crate::app::ports::HardwareInterface)
/// implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareError {
    /// Command sent while the device is powered off.
    NotPowered,
    /// Command sent before the device finished booting.
    NotReady,
    /// The power rail could not be enabled.
    PowerOnFailed,
    /// The acknowledgement did not fit the ack buffer.
    AckOverflow,
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPowered => write!(f, "device is not powered on"),
            Self::NotReady => write!(f, "device has not finished booting"),
            Self::PowerOnFailed => write!(f, "power-on failed"),
            Self::AckOverflow => write!(f, "acknowledgement overflowed buffer"),
        }
    }
}

impl From<HardwareError> for Error {
    fn from(e: HardwareError) -> Self {
        Self::Hardware(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
