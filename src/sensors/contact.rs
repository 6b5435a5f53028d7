//! Magnetic reed-switch contact sensor.
//!
//! The switch reports `CLOSED` while the magnet is present and `OPEN`
//! otherwise.  [`ContactState`] itself lives with the port traits; this
//! module only re-exports it.
//!
//! ## Simulation
//!
//! [`SimContactSensor`] keeps the switch state in a cell so tests can
//! flip it while a controller holds a shared reference to the device.

use core::cell::Cell;

use crate::app::commands::{self, Ack, Command};
use crate::app::ports::{Capability, ContactSensor, HardwareInterface, Status};
pub use crate::app::ports::ContactState;
use crate::error::{Error, HardwareError};

use super::SimCore;

/// Simulated contact sensor.  Defaults to `CLOSED`.
pub struct SimContactSensor {
    core: SimCore,
    /// `true` = closed (magnet present).
    closed: Cell<bool>,
}

impl SimContactSensor {
    /// A sensor that becomes ready on the first status poll.
    pub fn new() -> Self {
        Self::ready_after(0)
    }

    /// A sensor that reports `Booting` for the first `polls` status polls.
    pub fn ready_after(polls: u32) -> Self {
        Self {
            core: SimCore::new(polls),
            closed: Cell::new(true),
        }
    }

    pub fn set_contact(&self, state: ContactState) {
        self.closed.set(state == ContactState::Closed);
    }

    /// Assign from the device's textual form; anything other than
    /// `OPEN`/`CLOSED` is rejected and the current state kept.
    pub fn set_contact_str(&self, state: &str) -> Result<(), Error> {
        self.set_contact(state.parse()?);
        Ok(())
    }

    pub fn contact(&self) -> ContactState {
        if self.closed.get() {
            ContactState::Closed
        } else {
            ContactState::Open
        }
    }

    pub fn sim(&self) -> &SimCore {
        &self.core
    }
}

impl Default for SimContactSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareInterface for SimContactSensor {
    fn power_on(&self) -> Result<(), HardwareError> {
        self.core.power_on()
    }

    fn power_off(&self) {
        self.core.power_off();
    }

    fn query_status(&self) -> Status {
        self.core.poll()
    }

    fn send_command(&self, cmd: &Command) -> Result<Ack, HardwareError> {
        self.core.accept(cmd)?;
        if cmd.as_str() == commands::GET_CONTACT {
            return commands::ack(&["CONTACT:", self.contact().as_str()]);
        }
        commands::ack(&["ACK:", cmd.as_str()])
    }

    fn capability(&self) -> Capability {
        Capability::Contact
    }

    fn as_contact(&self) -> Option<&dyn ContactSensor> {
        Some(self)
    }
}

impl ContactSensor for SimContactSensor {
    fn get_contact(&self) -> &str {
        self.contact().as_str()
    }
}
