//! Duty ratios and the toggle-threshold computation.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Fraction of one blink cycle during which the LED is lit.
///
/// The raw codes match the configuration bytes used by existing firmware;
/// `0xff` marks an unconfigured driver there and is deliberately not a
/// variant; an unset ratio is `Option::<DutyRatio>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DutyRatio {
    /// Lit for the first third of the cycle
    OneToThree = 0,
    /// Lit for the first half of the cycle
    OneToTwo = 1,
    /// Lit for the whole cycle
    OneToOne = 2,
}

impl DutyRatio {
    /// Counter value within one cycle of `cycle_time_ms` units at which
    /// the LED switches from on to off. Integer division, rounding down.
    pub fn toggle_threshold(&self, cycle_time_ms: u32) -> u32 {
        match self {
            DutyRatio::OneToOne => cycle_time_ms,
            DutyRatio::OneToTwo => cycle_time_ms / 2,
            DutyRatio::OneToThree => cycle_time_ms / 3,
        }
    }
}
