use kb2pi_common::scancode::{direct, set2};

use crate::keymap::Keymap;

/// A single key transition, already translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub code: u8,
    pub is_down: bool,
}

/// One scan-code decoder variant.
///
/// `feed` is called once per received byte, in arrival order, from a
/// single serialized interrupt handler. It never blocks and yields at
/// most one event per byte. The keymap is passed by shared reference so
/// the driver keeps ownership of it.
pub trait ScanDecoder {
    fn feed(&mut self, raw: u8, keymap: &Keymap) -> Option<KeyEvent>;
}

/// Multi-byte (set 2) decoder for the Model M family.
///
/// Sentinel bytes are recognized in every state. Each lead-in keeps a
/// one-shot flag that the next resolved identifier consumes; a lead-in
/// repeated before resolution is last-write-wins. The pause countdown
/// swallows only non-sentinel bytes, so break inside a pause sequence
/// still marks the resulting pause event as a release.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Set2Decoder {
    break_pending: bool,
    extended_pending: bool,
    pause_countdown: u8,
}

impl Set2Decoder {
    pub const fn new() -> Self {
        Self {
            break_pending: false,
            extended_pending: false,
            pause_countdown: 0,
        }
    }

    /// True when no lead-in is mid-flight.
    pub fn is_idle(&self) -> bool {
        !self.break_pending && !self.extended_pending && self.pause_countdown == 0
    }
}

impl ScanDecoder for Set2Decoder {
    fn feed(&mut self, raw: u8, keymap: &Keymap) -> Option<KeyEvent> {
        match raw {
            set2::OVERRUN => {
                crate::debug!("keyboard overrun marker");
                return None;
            }
            set2::BREAK => {
                self.break_pending = true;
                return None;
            }
            set2::EXTENDED => {
                self.extended_pending = true;
                return None;
            }
            set2::PAUSE => {
                self.pause_countdown = 2;
                return None;
            }
            _ => {}
        }

        let mut id = raw;

        match self.pause_countdown {
            2 => {
                self.pause_countdown = 1;
                return None;
            }
            1 => {
                id = set2::PAUSE_KEY;
                self.pause_countdown = 0;
            }
            _ => {}
        }

        if self.extended_pending {
            id |= set2::EXTENDED_BIT;
            self.extended_pending = false;
        }

        let is_down = !self.break_pending;
        self.break_pending = false;

        Some(KeyEvent {
            code: keymap.lookup(id),
            is_down,
        })
    }
}

/// Single-byte decoder for the Model F family. Bit 7 carries the break
/// state and the low bits index the table directly, so the state
/// machine is degenerate: every byte resolves immediately.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirectDecoder;

impl DirectDecoder {
    pub const fn new() -> Self {
        Self
    }
}

impl ScanDecoder for DirectDecoder {
    fn feed(&mut self, raw: u8, keymap: &Keymap) -> Option<KeyEvent> {
        Some(KeyEvent {
            code: keymap.lookup(raw & direct::KEY_MASK),
            is_down: raw & direct::BREAK_BIT == 0,
        })
    }
}

#[cfg(test)]
#[path = "decoder_test.rs"]
mod test;
