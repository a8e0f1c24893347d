//! Capability traits for the hardware behind the driver.
//!
//! The driver core never touches hardware directly; the platform supplies
//! an LED switch, a millisecond timebase and a blocking delay through the
//! traits below. Adapters for [`embedded_hal`] pins and delays are
//! provided, and all three traits are implemented for `&mut T` so a
//! capability can be lent to the driver instead of moved into it.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::error::{LedError, Status};

/// Switching the physical LED on and off.
pub trait LedOps {
    fn on(&mut self) -> Status;
    fn off(&mut self) -> Status;
}

/// Millisecond timestamps from an arbitrary epoch.
pub trait TimeBase {
    fn now_ms(&mut self) -> Result<u32, LedError>;
}

/// Blocking delay, typically backed by the OS tick.
pub trait OsDelay {
    fn delay_ms(&mut self, ms: u32) -> Status;
}

impl<T: LedOps> LedOps for &mut T {
    fn on(&mut self) -> Status {
        T::on(self)
    }

    fn off(&mut self) -> Status {
        T::off(self)
    }
}

impl<T: TimeBase> TimeBase for &mut T {
    fn now_ms(&mut self) -> Result<u32, LedError> {
        T::now_ms(self)
    }
}

impl<T: OsDelay> OsDelay for &mut T {
    fn delay_ms(&mut self, ms: u32) -> Status {
        T::delay_ms(self, ms)
    }
}

/// Delay capability for targets without OS delay support. All waits
/// complete immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl OsDelay for NoDelay {
    fn delay_ms(&mut self, _ms: u32) -> Status {
        Ok(())
    }
}

/// LED driven by an [`embedded_hal::digital::OutputPin`].
pub struct PinLed<P> {
    pin: P,
    active_low: bool,
}

impl<P: OutputPin> PinLed<P> {
    /// LED lit when the pin is high
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// LED lit when the pin is low
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Consume the adapter and return the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> LedOps for PinLed<P> {
    fn on(&mut self) -> Status {
        let res = if self.active_low {
            self.pin.set_low()
        } else {
            self.pin.set_high()
        };

        res.map_err(|_| LedError::General)
    }

    fn off(&mut self) -> Status {
        let res = if self.active_low {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };

        res.map_err(|_| LedError::General)
    }
}

/// Blocking delay backed by an [`embedded_hal::delay::DelayNs`].
pub struct HalDelay<D>(pub D);

impl<D: DelayNs> OsDelay for HalDelay<D> {
    fn delay_ms(&mut self, ms: u32) -> Status {
        self.0.delay_ms(ms);
        Ok(())
    }
}

#[cfg(any(test, feature = "std"))]
pub mod std_support {
    //! Capability implementations on `std`. Requires feature `std`.

    use std::time::Instant;

    use super::*;

    /// Timebase counting milliseconds since its creation.
    pub struct StdClock(Instant);

    impl StdClock {
        pub fn new() -> Self {
            Self(Instant::now())
        }
    }

    impl Default for StdClock {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TimeBase for StdClock {
        fn now_ms(&mut self) -> Result<u32, LedError> {
            u32::try_from(self.0.elapsed().as_millis()).map_err(|_| LedError::General)
        }
    }

    /// Blocking delay via [`std::thread::sleep`].
    #[derive(Debug, Default, Clone, Copy)]
    pub struct StdDelay;

    impl OsDelay for StdDelay {
        fn delay_ms(&mut self, ms: u32) -> Status {
            std::thread::sleep(core::time::Duration::from_millis(u64::from(ms)));
            Ok(())
        }
    }
}
