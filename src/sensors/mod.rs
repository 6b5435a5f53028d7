//! Sensor hardware variants and the simulation core they share.
//!
//! Each variant implements [`HardwareInterface`](crate::app::ports::HardwareInterface)
//! plus its capability trait.  The simulated variants stand in for real
//! firmware on host builds and in tests.

pub mod contact;
pub mod motion;

use core::cell::{Cell, RefCell};

use log::debug;

use crate::app::commands::Command;
use crate::app::ports::Status;
use crate::error::HardwareError;

/// Power, boot and command bookkeeping common to every simulated device.
///
/// The device reports `Booting` until more than `ready_after` status polls
/// have been made since the last power-on, then `Ready`.  All state sits
/// in cells so a test can drive the device through `&self` while a
/// controller borrows it; the core is single-threaded (`!Sync`).
pub struct SimCore {
    powered: Cell<bool>,
    ready_after: u32,
    polls: Cell<u32>,
    power_ons: Cell<u32>,
    fault: Cell<bool>,
    fail_power_on: Cell<bool>,
    commands: RefCell<Vec<Command>>,
}

impl SimCore {
    pub fn new(ready_after: u32) -> Self {
        Self {
            powered: Cell::new(false),
            ready_after,
            polls: Cell::new(0),
            power_ons: Cell::new(0),
            fault: Cell::new(false),
            fail_power_on: Cell::new(false),
            commands: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn power_on(&self) -> Result<(), HardwareError> {
        self.power_ons.set(self.power_ons.get() + 1);
        if self.fail_power_on.get() {
            return Err(HardwareError::PowerOnFailed);
        }
        if !self.powered.replace(true) {
            self.polls.set(0);
        }
        Ok(())
    }

    pub(crate) fn power_off(&self) {
        self.powered.set(false);
    }

    pub(crate) fn poll(&self) -> Status {
        let polls = self.polls.get() + 1;
        self.polls.set(polls);
        let status = if self.fault.get() {
            Status::Fault
        } else if self.is_powered() && polls > self.ready_after {
            Status::Ready
        } else {
            Status::Booting
        };
        debug!("sim poll #{}: {:?}", polls, status);
        status
    }

    /// Gate a command on power and boot progress, then record it.
    pub(crate) fn accept(&self, cmd: &Command) -> Result<(), HardwareError> {
        if !self.is_powered() {
            return Err(HardwareError::NotPowered);
        }
        if self.polls.get() <= self.ready_after {
            return Err(HardwareError::NotReady);
        }
        self.commands.borrow_mut().push(cmd.clone());
        Ok(())
    }

    pub fn is_powered(&self) -> bool {
        self.powered.get()
    }

    /// Status polls since the last power-on.
    pub fn status_polls(&self) -> u32 {
        self.polls.get()
    }

    pub fn power_on_count(&self) -> u32 {
        self.power_ons.get()
    }

    /// Every command the device accepted, oldest first.
    pub fn commands(&self) -> Vec<Command> {
        self.commands.borrow().clone()
    }

    /// Make every subsequent poll report [`Status::Fault`].
    pub fn inject_fault(&self, fault: bool) {
        self.fault.set(fault);
    }

    /// Make every subsequent power-on fail.
    pub fn fail_power_on(&self, fail: bool) {
        self.fail_power_on.set(fail);
    }
}
