//! The blink driver core.
//!
//! [`LedDriver`] owns one LED plus the timebase and delay capabilities
//! that were mounted into it, and drives the LED through blocking blink
//! runs. It is recommended to use [`crate::builder::LedDriverBuilder`] to
//! obtain a mounted driver.
//!
//! Every operation takes `&mut self`, so a driver is single-owner by
//! construction; sharing one across execution contexts requires an
//! explicit lock around the whole driver. [`LedDriver::blink`] blocks for
//! the full `blink_count * cycle_time_ms` abstract time units and has no
//! cancellation path.

use crate::duty::DutyRatio;
use crate::error::{LedError, Status};
use crate::ops::{LedOps, OsDelay, TimeBase};

/// Upper bound (exclusive) on the cycle time accepted by [`LedDriver::control`].
pub const CYCLE_TIME_MAX_MS: u32 = 10_000;

/// Upper bound (exclusive) on the blink count accepted by [`LedDriver::control`].
pub const BLINK_COUNT_MAX: u32 = 1_000;

/// How long the LED is held off during mount before the driver reports ready.
pub const SETTLE_TIME_MS: u32 = 600;

/// Blocking LED blink driver.
///
/// A fresh driver is unmounted: capabilities are absent and every
/// operation other than [`LedDriver::instantiate`] fails with
/// [`LedError::Parameter`]. Mounting is atomic; after a failed mount the
/// driver is indistinguishable from a fresh one.
pub struct LedDriver<O, T, D>
where
    O: LedOps,
    T: TimeBase,
    D: OsDelay,
{
    initialized: bool,
    cycle_time_ms: u32,
    blink_count: u32,
    duty: Option<DutyRatio>,
    ops: Option<O>,
    time: Option<T>,
    delay: Option<D>,
}

impl<O, T, D> Default for LedDriver<O, T, D>
where
    O: LedOps,
    T: TimeBase,
    D: OsDelay,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<O, T, D> LedDriver<O, T, D>
where
    O: LedOps,
    T: TimeBase,
    D: OsDelay,
{
    /// Create an unmounted driver.
    pub fn new() -> Self {
        Self {
            initialized: false,
            cycle_time_ms: 0,
            blink_count: 0,
            duty: None,
            ops: None,
            time: None,
            delay: None,
        }
    }

    /// Mount the capabilities and bring the hardware to a known state.
    ///
    /// The LED is forced off, held there for [`SETTLE_TIME_MS`] and the
    /// timebase is sampled once to verify it answers. Blink parameters
    /// are reset. Nothing is mounted unless all three steps succeed, so
    /// a failed mount leaves the driver unmounted and reusable.
    ///
    /// Returns [`LedError::Source`] if the driver is already mounted;
    /// the existing capabilities and parameters are untouched.
    pub fn instantiate(&mut self, mut ops: O, mut time: T, mut delay: D) -> Status {
        debug!("led driver mount start");

        if self.initialized {
            debug!("led driver already mounted");
            return Err(LedError::Source);
        }

        self.cycle_time_ms = 0;
        self.blink_count = 0;
        self.duty = None;

        // Hardware first; the capabilities are dropped if it fails.
        Self::hardware_init(&mut ops, &mut time, &mut delay)?;

        self.ops = Some(ops);
        self.time = Some(time);
        self.delay = Some(delay);
        self.initialized = true;

        debug!("led driver mounted");
        Ok(())
    }

    fn hardware_init(ops: &mut O, time: &mut T, delay: &mut D) -> Status {
        ops.off()?;
        delay.delay_ms(SETTLE_TIME_MS)?;
        time.now_ms()?;

        Ok(())
    }

    /// Store new blink parameters and run one blink sequence.
    ///
    /// `cycle_time_ms` must be below [`CYCLE_TIME_MAX_MS`] and
    /// `blink_count` below [`BLINK_COUNT_MAX`]. All checks pass before
    /// anything is stored; on [`LedError::Parameter`] the previous
    /// parameters survive and no LED command is issued.
    pub fn control(&mut self, cycle_time_ms: u32, blink_count: u32, duty: DutyRatio) -> Status {
        if !self.initialized {
            debug!("control on unmounted driver");
            return Err(LedError::Parameter);
        }

        if cycle_time_ms >= CYCLE_TIME_MAX_MS || blink_count >= BLINK_COUNT_MAX {
            debug!("control parameters out of range");
            return Err(LedError::Parameter);
        }

        self.cycle_time_ms = cycle_time_ms;
        self.blink_count = blink_count;
        self.duty = Some(duty);

        self.blink()
    }

    /// Run one blink sequence with the stored parameters.
    ///
    /// For each of `blink_count` repetitions the cycle counter runs from
    /// 0 up to `cycle_time_ms`, commanding the LED on below the toggle
    /// threshold and off from the threshold onwards, one command per
    /// abstract time unit. Pacing the units against wall-clock time is
    /// the capability implementation's business, not the core's.
    ///
    /// Fails with [`LedError::Parameter`] before any LED command if the
    /// driver is unmounted or no duty ratio has been set yet.
    pub fn blink(&mut self) -> Status {
        if !self.initialized {
            debug!("blink on unmounted driver");
            return Err(LedError::Parameter);
        }

        let duty = self.duty.ok_or(LedError::Parameter)?;
        let ops = self.ops.as_mut().ok_or(LedError::Parameter)?;

        let threshold = duty.toggle_threshold(self.cycle_time_ms);

        for _ in 0..self.blink_count {
            for unit in 0..self.cycle_time_ms {
                if unit < threshold {
                    ops.on()?;
                } else {
                    ops.off()?;
                }
            }
        }

        Ok(())
    }

    /// Whether [`LedDriver::instantiate`] has completed successfully.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Stored blink parameters, once a duty ratio has been set.
    pub fn params(&self) -> Option<(u32, u32, DutyRatio)> {
        self.duty
            .map(|duty| (self.cycle_time_ms, self.blink_count, duty))
    }
}
