//! PIR motion sensor.
//!
//! The detector output is a single boolean: motion seen in the current
//! window or not.  On host/test builds [`SimMotionSensor`] holds it in a
//! cell that the test drives.

use core::cell::Cell;

use crate::app::commands::{self, Ack, Command};
use crate::app::ports::{Capability, HardwareInterface, MotionSensor, Status};
use crate::error::HardwareError;

use super::SimCore;

/// Simulated motion sensor.  Starts with no motion detected.
pub struct SimMotionSensor {
    core: SimCore,
    detected: Cell<bool>,
}

impl SimMotionSensor {
    /// A sensor that becomes ready on the first status poll.
    pub fn new() -> Self {
        Self::ready_after(0)
    }

    /// A sensor that reports `Booting` for the first `polls` status polls.
    pub fn ready_after(polls: u32) -> Self {
        Self {
            core: SimCore::new(polls),
            detected: Cell::new(false),
        }
    }

    pub fn set_motion(&self, detected: bool) {
        self.detected.set(detected);
    }

    pub fn sim(&self) -> &SimCore {
        &self.core
    }
}

impl Default for SimMotionSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareInterface for SimMotionSensor {
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
        if cmd.as_str() == commands::GET_MOTION {
            let answer = if self.get_motion() { "YES" } else { "NO" };
            return commands::ack(&["MOTION:", answer]);
        }
        commands::ack(&["ACK:", cmd.as_str()])
    }

    fn capability(&self) -> Capability {
        Capability::Motion
    }

    fn as_motion(&self) -> Option<&dyn MotionSensor> {
        Some(self)
    }
}

impl MotionSensor for SimMotionSensor {
    fn get_motion(&self) -> bool {
        self.detected.get()
    }
}
