//! Port traits: the boundary between the controller and the hardware.
//!
//! ```text
//!   Hardware adapter ──▶ HardwareInterface ──▶ DeviceController
//!                          ├─ as_motion()  ──▶ MotionSensor
//!                          └─ as_contact() ──▶ ContactSensor
//! ```
//!
//! Hardware variants implement [`HardwareInterface`] and declare a
//! [`Capability`].  Sensor-specific state is reached through the optional
//! `as_*` accessors, so the controller branches on what the hardware says it
//! can do, never on its concrete type.
//!
//! Every method takes `&self`: the controller holds a shared reference and
//! the owner keeps driving the device (or the simulation) alongside it.

use core::fmt;
use core::str::FromStr;

use crate::app::commands::{Ack, Command};
use crate::error::{Error, HardwareError};

// ───────────────────────────────────────────────────────────────
// Status and capability
// ───────────────────────────────────────────────────────────────

/// Boot status reported by the hardware on each poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Still coming up.
    Booting,
    /// Accepting commands.
    Ready,
    /// The hardware signalled a fatal boot fault.
    Fault,
}

/// Named set of sensor operations a hardware variant exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Base contract only.
    Generic,
    Motion,
    Contact,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => write!(f, "generic"),
            Self::Motion => write!(f, "motion"),
            Self::Contact => write!(f, "contact"),
        }
    }
}

/// Reed-switch state.  The textual form is what the device speaks, so
/// parsing it is the single point where invalid states are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactState {
    Open,
    Closed,
}

impl ContactState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}

impl FromStr for ContactState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(Self::Open),
            "CLOSED" => Ok(Self::Closed),
            _ => Err(Error::InvalidContactState),
        }
    }
}

impl fmt::Display for ContactState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ───────────────────────────────────────────────────────────────
// Hardware port (driven adapter: controller → device)
// ───────────────────────────────────────────────────────────────

/// Base contract every controllable device satisfies.
pub trait HardwareInterface {
    /// Enable the device's power rail.
    fn power_on(&self) -> Result<(), HardwareError>;

    /// Cut power.  Never fails; calling it while off is harmless.
    fn power_off(&self);

    /// Poll the boot status.  Infallible by contract.
    fn query_status(&self) -> Status;

    /// Deliver a command and return the device's acknowledgement.
    fn send_command(&self, cmd: &Command) -> Result<Ack, HardwareError>;

    /// The capability this device declares.
    fn capability(&self) -> Capability {
        Capability::Generic
    }

    /// Motion accessor, present only on motion hardware.
    fn as_motion(&self) -> Option<&dyn MotionSensor> {
        None
    }

    /// Contact accessor, present only on contact hardware.
    fn as_contact(&self) -> Option<&dyn ContactSensor> {
        None
    }
}

// ───────────────────────────────────────────────────────────────
// Capability ports
// ───────────────────────────────────────────────────────────────

/// Read side of a motion sensor.
pub trait MotionSensor {
    /// `true` while motion is detected.
    fn get_motion(&self) -> bool;
}

/// Read side of a contact (reed switch) sensor.
pub trait ContactSensor {
    /// Current contact state as reported by the device, nominally
    /// `"OPEN"` or `"CLOSED"`.  The controller validates the text, so a
    /// misbehaving device surfaces as an error rather than a bogus state.
    fn get_contact(&self) -> &str;
}
