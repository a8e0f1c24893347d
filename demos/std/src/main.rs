//! Blink a virtual LED on stdout.
//!
//! The abstract time units of the blink loop are paced here by sleeping
//! one millisecond per unit, so a cycle time of 300 takes roughly 300 ms
//! of wall-clock time.

use blinken::builder::LedDriverBuilder;
use blinken::duty::DutyRatio;
use blinken::error::Status;
use blinken::ops::std_support::{StdClock, StdDelay};
use blinken::ops::LedOps;

use std::thread;
use std::time::Duration;

/// LED that prints state transitions and sleeps one tick per command.
struct ConsoleLed {
    lit: bool,
}

impl LedOps for ConsoleLed {
    fn on(&mut self) -> Status {
        if !self.lit {
            println!("LED on");
            self.lit = true;
        }

        thread::sleep(Duration::from_millis(1));
        Ok(())
    }

    fn off(&mut self) -> Status {
        if self.lit {
            println!("LED off");
            self.lit = false;
        }

        thread::sleep(Duration::from_millis(1));
        Ok(())
    }
}

fn main() {
    let mut driver = LedDriverBuilder::new(ConsoleLed { lit: false }, StdClock::new())
        .with_os_delay(StdDelay)
        .build()
        .unwrap();

    driver.control(300, 3, DutyRatio::OneToThree).unwrap();
}
