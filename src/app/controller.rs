//! Device controller: the boot/command/shutdown state machine.
//!
//! [`DeviceController`] borrows one [`HardwareInterface`] for its whole
//! life and gates every command on a successful boot.  The wait between
//! status polls goes through an injected [`DelayNs`], so the retry loop
//! runs in simulated time under test.
//!
//! ```text
//!  Uninitialized ──┐
//!                  ├─ boot_device() ─▶ Booting ── Ready polled ──▶ Ready
//!  NotReady ───────┘                      │                         │
//!     ▲                                   │ budget spent /          │
//!     ├───────────────────────────────────┘ power-on failed         │
//!     └──────────────────────────── shutdown() ─────────────────────┘
//! ```

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::app::commands::{Ack, Command};
use crate::app::ports::{Capability, ContactState, HardwareInterface, Status};
use crate::config::BootConfig;
use crate::error::{Error, Result};

/// Lifecycle state of a [`DeviceController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Constructed, never booted.
    Uninitialized,
    /// Boot sequence in progress.
    Booting,
    /// Booted; commands are accepted.
    Ready,
    /// Shut down, or the last boot attempt failed.
    NotReady,
}

/// Drives one hardware device through boot, commands and shutdown.
pub struct DeviceController<'a, H: HardwareInterface + ?Sized, D: DelayNs> {
    hw: &'a H,
    delay: D,
    state: ControllerState,
}

impl<'a, H: HardwareInterface + ?Sized, D: DelayNs> DeviceController<'a, H, D> {
    pub fn new(hw: &'a H, delay: D) -> Self {
        Self {
            hw,
            delay,
            state: ControllerState::Uninitialized,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Power the device on and poll its status until it reports ready.
    ///
    /// Polls at most `max_attempts` times, waiting `poll_interval_ms`
    /// between polls (not after the last).  Returns the number of polls it
    /// took.  Any status other than [`Status::Ready`] keeps the loop going,
    /// including [`Status::Fault`].
    pub fn boot_device(&mut self, max_attempts: u32, poll_interval_ms: u32) -> Result<u32> {
        self.state = ControllerState::Booting;
        info!(
            "Booting {} device (max {} attempts, {} ms interval)",
            self.hw.capability(),
            max_attempts,
            poll_interval_ms
        );

        if let Err(e) = self.hw.power_on() {
            warn!("Power-on failed: {}", e);
            self.state = ControllerState::NotReady;
            return Err(e.into());
        }

        for attempt in 1..=max_attempts {
            match self.hw.query_status() {
                Status::Ready => {
                    self.state = ControllerState::Ready;
                    info!("Device ready after {} attempt(s)", attempt);
                    return Ok(attempt);
                }
                Status::Booting => debug!("Attempt {}: still booting", attempt),
                Status::Fault => warn!("Attempt {}: device reported a boot fault", attempt),
            }
            if attempt < max_attempts {
                self.delay.delay_ms(poll_interval_ms);
            }
        }

        self.state = ControllerState::NotReady;
        warn!("Device failed to boot within {} attempts", max_attempts);
        Err(Error::BootTimeout {
            attempts: max_attempts,
        })
    }

    /// [`boot_device`](Self::boot_device) with parameters from `config`.
    pub fn boot(&mut self, config: BootConfig) -> Result<u32> {
        self.boot_device(config.max_attempts, config.poll_interval_ms)
    }

    /// Power the device off.  Always leaves the controller not ready.
    pub fn shutdown(&mut self) {
        self.hw.power_off();
        if self.state == ControllerState::Ready {
            info!("Device shut down");
        }
        self.state = ControllerState::NotReady;
    }

    // ── Commands ──────────────────────────────────────────────

    /// Forward `cmd` to the hardware and return its acknowledgement
    /// unchanged.  Rejected without touching the hardware unless booted.
    pub fn send_command(&mut self, cmd: &Command) -> Result<Ack> {
        if !self.is_ready() {
            warn!("Rejected command {:?}: device not ready", cmd.as_str());
            return Err(Error::NotReady);
        }
        let ack = self.hw.send_command(cmd)?;
        debug!("{} -> {}", cmd, ack);
        Ok(ack)
    }

    /// Build a [`Command`] from text and send it.
    pub fn send_str(&mut self, text: &str) -> Result<Ack> {
        let cmd = Command::new(text)?;
        self.send_command(&cmd)
    }

    // ── Sensor dispatch ───────────────────────────────────────

    /// Current motion state.  Requires motion capability, not readiness.
    pub fn check_motion(&self) -> Result<bool> {
        let motion = self
            .hw
            .as_motion()
            .ok_or_else(|| self.wrong_type(Capability::Motion))?;
        Ok(motion.get_motion())
    }

    /// Current contact state.  Requires contact capability, not readiness.
    pub fn check_contact(&self) -> Result<ContactState> {
        let contact = self
            .hw
            .as_contact()
            .ok_or_else(|| self.wrong_type(Capability::Contact))?;
        let raw = contact.get_contact();
        raw.parse::<ContactState>().map_err(|_| {
            warn!("Contact sensor reported invalid state {:?}", raw);
            Error::InvalidDeviceState
        })
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == ControllerState::Ready
    }

    pub fn capability(&self) -> Capability {
        self.hw.capability()
    }

    pub fn hardware(&self) -> &'a H {
        self.hw
    }

    // ── Internal ──────────────────────────────────────────────

    fn wrong_type(&self, expected: Capability) -> Error {
        Error::WrongDeviceType {
            expected,
            found: self.hw.capability(),
        }
    }
}
