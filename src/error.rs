//! Error types.

use core::fmt;

use crate::pins::{Pin, PinName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// Two coil wires are mapped to the same physical pin.
    Duplicate { a: PinName, b: PinName, pin: Pin },
    /// A pin falls outside the usable digital range of the board.
    OutOfRange { name: PinName, pin: Pin },
    /// Not one of the twelve symbolic pin names.
    UnknownName,
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinError::Duplicate { a, b, pin } => {
                write!(f, "{} and {} both mapped to pin {}", a, b, pin.0)
            }
            PinError::OutOfRange { name, pin } => write!(
                f,
                "{} mapped to pin {} outside usable range {}..={}",
                name,
                pin.0,
                crate::config::PIN_MIN,
                crate::config::PIN_MAX
            ),
            PinError::UnknownName => write!(f, "unknown pin name"),
        }
    }
}

pub type PinResult<T> = core::result::Result<T, PinError>;
