//! Mock hardware for driver tests.
//!
//! Each mock records what the driver asked of it into a shared log the
//! test keeps a handle to, so the log stays inspectable after the mock
//! has been moved into a driver. The failure-injecting constructors turn
//! the nth request into an error.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use crate::error::{LedError, Status};
use crate::ops::{LedOps, OsDelay, TimeBase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedCommand {
    On,
    Off,
}

pub type CommandLog = Rc<RefCell<Vec<LedCommand>>>;

pub struct MockLed {
    log: CommandLog,
    fail_at: Option<usize>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            fail_at: None,
        }
    }

    /// Fail the nth command, 0-based.
    pub fn failing_at(fail_at: usize) -> Self {
        Self {
            fail_at: Some(fail_at),
            ..Self::new()
        }
    }

    pub fn log(&self) -> CommandLog {
        Rc::clone(&self.log)
    }

    fn push(&mut self, command: LedCommand) -> Status {
        if self.fail_at == Some(self.log.borrow().len()) {
            return Err(LedError::General);
        }

        self.log.borrow_mut().push(command);
        Ok(())
    }
}

impl LedOps for MockLed {
    fn on(&mut self) -> Status {
        self.push(LedCommand::On)
    }

    fn off(&mut self) -> Status {
        self.push(LedCommand::Off)
    }
}

pub struct MockClock {
    now_ms: u32,
    samples: Rc<Cell<usize>>,
    fail: bool,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            samples: Rc::new(Cell::new(0)),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn samples(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.samples)
    }
}

impl TimeBase for MockClock {
    fn now_ms(&mut self) -> Result<u32, LedError> {
        if self.fail {
            return Err(LedError::Timeout);
        }

        self.samples.set(self.samples.get() + 1);
        self.now_ms += 1;
        Ok(self.now_ms)
    }
}

pub struct MockDelay {
    log: Rc<RefCell<Vec<u32>>>,
    fail: bool,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn log(&self) -> Rc<RefCell<Vec<u32>>> {
        Rc::clone(&self.log)
    }
}

impl OsDelay for MockDelay {
    fn delay_ms(&mut self, ms: u32) -> Status {
        if self.fail {
            return Err(LedError::Timeout);
        }

        self.log.borrow_mut().push(ms);
        Ok(())
    }
}
