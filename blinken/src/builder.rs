//! Builder for LED drivers.

use crate::driver::LedDriver;
use crate::error::LedError;
use crate::ops::{LedOps, NoDelay, OsDelay, TimeBase};

/// Builder for [`LedDriver`].
///
/// Starts without OS delay support; [`LedDriverBuilder::with_os_delay`]
/// swaps in a real delay for the power-up settle wait. A driver returned
/// by [`LedDriverBuilder::build`] is always mounted.
///
/// # Example
/// ```no_run
/// # use blinken::error::{LedError, Status};
/// # use blinken::ops::{LedOps, OsDelay, TimeBase};
/// # struct MyLed;
/// # impl LedOps for MyLed {
/// #     fn on(&mut self) -> Status { unimplemented!() }
/// #     fn off(&mut self) -> Status { unimplemented!() }
/// # }
/// # struct MyClock;
/// # impl TimeBase for MyClock {
/// #     fn now_ms(&mut self) -> Result<u32, LedError> { unimplemented!() }
/// # }
/// # struct MyDelay;
/// # impl OsDelay for MyDelay {
/// #     fn delay_ms(&mut self, ms: u32) -> Status { unimplemented!() }
/// # }
/// use blinken::builder::LedDriverBuilder;
///
/// let driver = LedDriverBuilder::new(MyLed, MyClock)
///     .with_os_delay(MyDelay)
///     .build()
///     .unwrap();
/// ```
pub struct LedDriverBuilder<O, T, D>
where
    O: LedOps,
    T: TimeBase,
    D: OsDelay,
{
    ops: O,
    time: T,
    delay: D,
}

impl<O, T> LedDriverBuilder<O, T, NoDelay>
where
    O: LedOps,
    T: TimeBase,
{
    /// Create a builder from the LED and timebase capabilities.
    pub fn new(ops: O, time: T) -> Self {
        Self {
            ops,
            time,
            delay: NoDelay,
        }
    }
}

impl<O, T, D> LedDriverBuilder<O, T, D>
where
    O: LedOps,
    T: TimeBase,
    D: OsDelay,
{
    /// Use an OS-backed delay for the settle wait during mount.
    pub fn with_os_delay<D2: OsDelay>(self, delay: D2) -> LedDriverBuilder<O, T, D2> {
        LedDriverBuilder {
            ops: self.ops,
            time: self.time,
            delay,
        }
    }

    /// Build and mount the driver. Is equivalent of calling
    /// [`LedDriver::new`] followed by [`LedDriver::instantiate`].
    pub fn build(self) -> Result<LedDriver<O, T, D>, LedError> {
        let mut driver = LedDriver::new();
        driver.instantiate(self.ops, self.time, self.delay)?;

        Ok(driver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::SETTLE_TIME_MS;
    use crate::duty::DutyRatio;
    use crate::testlib::{LedCommand, MockClock, MockDelay, MockLed};

    #[test]
    fn build_mounts_the_driver() {
        let led = MockLed::new();
        let delay = MockDelay::new();
        let (log, delay_log) = (led.log(), delay.log());

        let mut driver = LedDriverBuilder::new(led, MockClock::new())
            .with_os_delay(delay)
            .build()
            .unwrap();

        assert!(driver.is_initialized());
        assert_eq!(*log.borrow(), vec![LedCommand::Off]);
        assert_eq!(*delay_log.borrow(), vec![SETTLE_TIME_MS]);

        driver.control(3, 1, DutyRatio::OneToOne).unwrap();
        assert_eq!(log.borrow().len(), 4);
    }

    #[test]
    fn build_without_os_delay() {
        let driver = LedDriverBuilder::new(MockLed::new(), MockClock::new())
            .build()
            .unwrap();

        assert!(driver.is_initialized());
    }

    #[test]
    fn build_propagates_init_failure() {
        let result = LedDriverBuilder::new(MockLed::failing_at(0), MockClock::new()).build();

        assert!(matches!(result, Err(LedError::General)));
    }
}
