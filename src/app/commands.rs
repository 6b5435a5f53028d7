//! Outbound commands and their acknowledgements.
//!
//! Both are fixed-capacity strings so dispatch never touches the heap.
//! The controller treats them as opaque: it forwards the command and
//! hands the ack back unchanged.

use crate::error::{Error, HardwareError};

/// Maximum command length in bytes.
pub const COMMAND_CAPACITY: usize = 32;

/// Maximum acknowledgement length in bytes.
pub const ACK_CAPACITY: usize = 64;

/// Acknowledgement token returned by the hardware.
pub type Ack = heapless::String<ACK_CAPACITY>;

/// Query the motion sensor's detection state.
pub const GET_MOTION: &str = "GET_MOTION";

/// Query the contact sensor's switch state.
pub const GET_CONTACT: &str = "GET_CONTACT";

/// A command addressed to the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command(heapless::String<COMMAND_CAPACITY>);

impl Command {
    /// Build a command from text.  Fails if it exceeds [`COMMAND_CAPACITY`].
    pub fn new(text: &str) -> Result<Self, Error> {
        let mut s = heapless::String::new();
        s.push_str(text).map_err(|()| Error::CommandTooLong)?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<&str> for Command {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build an ack from its parts, e.g. `ack(&["ACK:", "PING"])`.
pub fn ack(parts: &[&str]) -> Result<Ack, HardwareError> {
    let mut buf = Ack::new();
    for part in parts {
        buf.push_str(part).map_err(|()| HardwareError::AckOverflow)?;
    }
    Ok(buf)
}
