//! Error types for the dashboard core.

use std::error::Error;
use std::fmt;

/// Errors raised by the device model and the rendering sink.
///
/// All variants are local-recoverable: the update loop never aborts on any
/// of them. A `MissingSlot` in particular only skips the one write that
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum DashError {
    /// A toggle or power-sample request named a device id that does not exist.
    UnknownDevice(String),
    /// A power sample was negative.
    InvalidValue {
        /// Device the sample was intended for.
        device: String,
        /// The offending value (kW).
        value: f32,
    },
    /// A display-slot write named a slot id the sink has not registered.
    MissingSlot(String),
}

impl fmt::Display for DashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDevice(id) => write!(f, "unknown device \"{id}\""),
            Self::InvalidValue { device, value } => {
                write!(f, "invalid power sample {value} kW for device \"{device}\" (must be >= 0)")
            }
            Self::MissingSlot(id) => write!(f, "display slot \"{id}\" is not registered"),
        }
    }
}

impl Error for DashError {}
