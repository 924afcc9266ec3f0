use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Channel};

use crate::decoder::KeyEvent;

/// Host input pipeline seam: one key-state report followed by a sync
/// marking the batch boundary, once per decoded event.
pub trait KeySink {
    fn report_key(&self, code: u8, is_down: bool);
    fn sync(&self);
}

impl<T: KeySink> KeySink for &T {
    fn report_key(&self, code: u8, is_down: bool) {
        T::report_key(self, code, is_down);
    }

    fn sync(&self) {
        T::sync(self);
    }
}

/// Forwards decoded events to the sink, one emission per event, no
/// buffering or coalescing.
///
/// An event whose code is zero has no entry in the installed table and
/// is suppressed here instead of surfacing as a phantom key. That makes
/// zero unusable as an output code; it is part of the emitter contract.
pub struct Reporter<S: KeySink> {
    sink: S,
}

impl<S: KeySink> Reporter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn report(&self, event: KeyEvent) {
        if event.code == 0 {
            crate::debug!("unmapped identifier dropped");
            return;
        }
        self.sink.report_key(event.code, event.is_down);
        self.sink.sync();
    }
}

/// Hands events from the interrupt handler to an async host-side task.
///
/// Sending never blocks; when the host task has fallen `N` events
/// behind, further events are dropped with a warning rather than
/// stalling the interrupt handler.
pub struct KeyEventChannel<M: RawMutex, const N: usize>(Channel<M, KeyEvent, N>);

impl<M: RawMutex, const N: usize> Default for KeyEventChannel<M, N> {
    fn default() -> Self {
        Self(Channel::new())
    }
}

impl<M: RawMutex, const N: usize> KeyEventChannel<M, N> {
    pub async fn receive(&self) -> KeyEvent {
        self.0.receive().await
    }

    pub fn try_send(&self, event: KeyEvent) {
        if self.0.try_send(event).is_err() {
            crate::warn!("key event queue full; event dropped");
        }
    }
}

impl<M: RawMutex, const N: usize> KeySink for KeyEventChannel<M, N> {
    fn report_key(&self, code: u8, is_down: bool) {
        self.try_send(KeyEvent { code, is_down });
    }

    // Channel delivery is the batch boundary.
    fn sync(&self) {}
}

#[cfg(test)]
#[path = "reporter_test.rs"]
mod test;
