//! Blinken is a hardware-agnostic `#[no_std]` LED blink driver. The core
//! timing logic is hardware-free: it computes a toggle threshold from a
//! duty ratio and commands an abstract LED capability once per time unit,
//! so it can drive a GPIO pin, a relay, a virtual LED on stdout, or a
//! mock in a test.
//!
//! Features:
//! - Hardware-free core
//! - Capability traits for LED control, timebase and blocking delay
//! - Adapters for [`embedded_hal`] `OutputPin` and `DelayNs`
//! - No allocation, no panics in the driver paths
//! - Optional `defmt` debug output
//!
//! Hardware comes in through three small traits in [`ops`]: [`ops::LedOps`]
//! for switching the LED, [`ops::TimeBase`] for a millisecond timestamp and
//! [`ops::OsDelay`] for the power-up settle wait. Targets without an OS
//! delay use [`ops::NoDelay`].
//!
//! Drivers are built using [`builder::LedDriverBuilder`].
//!
//! # Example
//! ```no_run
//! # use blinken::error::{LedError, Status};
//! # use blinken::ops::{LedOps, TimeBase};
//! # struct MyLed;
//! # impl LedOps for MyLed {
//! #     fn on(&mut self) -> Status { unimplemented!() }
//! #     fn off(&mut self) -> Status { unimplemented!() }
//! # }
//! # struct MyClock;
//! # impl TimeBase for MyClock {
//! #     fn now_ms(&mut self) -> Result<u32, LedError> { unimplemented!() }
//! # }
//! use blinken::{builder::LedDriverBuilder, duty::DutyRatio};
//!
//! fn main() {
//!     let mut driver = LedDriverBuilder::new(MyLed, MyClock)
//!         .build()
//!         .unwrap();
//!
//!     // Two cycles of 300 units, lit for the first third of each.
//!     driver.control(300, 2, DutyRatio::OneToThree).unwrap();
//! }
//! ```

#![no_std]

#[cfg(any(test, doc, feature = "std"))]
#[macro_use]
extern crate std;

// Debug output hook. Forwards to defmt when the `defmt` feature is
// enabled and compiles to nothing otherwise.
macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);
    }};
}

pub mod builder;
pub mod driver;
pub mod duty;
pub mod error;
pub mod ops;

#[cfg(test)]
pub(crate) mod testlib;
