extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::service::{UartPort, UartRx};

#[derive(Debug, PartialEq)]
pub struct TestUartError;

#[derive(Default)]
struct TestUartInner {
    fifo: RefCell<VecDeque<u8>>,
    enabled: Cell<bool>,
    divisor: Cell<u16>,
    reads: Cell<usize>,
    fail_enable: Cell<bool>,
    /// Report data-ready forever, as a wedged status register would.
    stuck: Cell<bool>,
}

/// In-memory receiver: a byte queue standing in for the rx FIFO.
/// Clones share state so a test can keep a handle after the service
/// takes ownership.
#[derive(Clone, Default)]
pub struct TestUart(Rc<TestUartInner>);

impl TestUart {
    pub fn push(&self, bytes: &[u8]) {
        self.0.fifo.borrow_mut().extend(bytes);
    }

    pub fn is_enabled(&self) -> bool {
        self.0.enabled.get()
    }

    pub fn divisor(&self) -> u16 {
        self.0.divisor.get()
    }

    pub fn reads(&self) -> usize {
        self.0.reads.get()
    }

    pub fn fail_enable(&self) {
        self.0.fail_enable.set(true);
    }

    pub fn wedge(&self) {
        self.0.stuck.set(true);
    }
}

impl UartRx for TestUart {
    fn irq_pending(&self) -> bool {
        self.0.stuck.get() || !self.0.fifo.borrow().is_empty()
    }

    fn has_data(&self) -> bool {
        self.irq_pending()
    }

    fn read_byte(&self) -> u8 {
        self.0.reads.set(self.0.reads.get() + 1);
        self.0.fifo.borrow_mut().pop_front().unwrap_or(0)
    }
}

impl UartPort for TestUart {
    type Error = TestUartError;

    fn enable(&mut self, divisor: u16) -> Result<(), Self::Error> {
        if self.0.fail_enable.get() {
            return Err(TestUartError);
        }
        self.0.divisor.set(divisor);
        self.0.enabled.set(true);
        Ok(())
    }

    fn disable(&mut self) {
        self.0.enabled.set(false);
    }
}
