//! Error types

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Errors reported by driver operations and capabilities.
///
/// The raw codes are stable and shared with firmware that configures the
/// driver from C-style status bytes; success is not a code here but the
/// `Ok` arm of [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LedError {
    /// General failure reported by a capability
    General = 1,
    /// Operation timed out
    Timeout = 2,
    /// Resource or state conflict, e.g. double instantiation
    Source = 3,
    /// Invalid input or out-of-range value
    Parameter = 4,
    /// Memory allocation failed or insufficient
    NoMemory = 5,
    /// Called from interrupt context
    Isr = 6,
    /// Sentinel for future use, never produced by the driver
    Reserved = 0xff,
}

/// Result of a driver operation.
pub type Status = Result<(), LedError>;
