extern crate std;

use core::cell::{Cell, RefCell};
use std::vec::Vec;

use crate::reporter::KeySink;

/// Records every report and sync for inspection.
#[derive(Default)]
pub struct TestSink {
    pub keys: RefCell<Vec<(u8, bool)>>,
    pub syncs: Cell<usize>,
}

impl KeySink for TestSink {
    fn report_key(&self, code: u8, is_down: bool) {
        self.keys.borrow_mut().push((code, is_down));
    }

    fn sync(&self) {
        self.syncs.set(self.syncs.get() + 1);
    }
}
