//! Default raw-identifier to key-code translation tables.
//!
//! Output codes follow the Linux input-event numbering so the tables
//! feed an evdev style pipeline unmodified. Platforms that load their
//! own overlay replace these through the driver configuration blob.
//! A zero entry means the identifier has no mapped key.

/// Set 2 identifiers as the decoder resolves them: extended keys are
/// offset by 0x80 and the pause sequence collapses to 0x88. Identifiers
/// 0x83/0x84 really are single bytes on the Model M (F7 and SysRq) even
/// though they sit in the extended range.
const SET2_PAIRS: &[(u8, u8)] = &[
    (0x01, 67), // F9
    (0x03, 63), // F5
    (0x04, 61), // F3
    (0x05, 59), // F1
    (0x06, 60), // F2
    (0x07, 88), // F12
    (0x09, 68), // F10
    (0x0a, 66), // F8
    (0x0b, 64), // F6
    (0x0c, 62), // F4
    (0x0d, 15), // Tab
    (0x0e, 41), // `
    (0x11, 56), // left Alt
    (0x12, 42), // left Shift
    (0x14, 29), // left Ctrl
    (0x15, 16), // Q
    (0x16, 2),  // 1
    (0x1a, 44), // Z
    (0x1b, 31), // S
    (0x1c, 30), // A
    (0x1d, 17), // W
    (0x1e, 3),  // 2
    (0x21, 46), // C
    (0x22, 45), // X
    (0x23, 32), // D
    (0x24, 18), // E
    (0x25, 5),  // 4
    (0x26, 4),  // 3
    (0x29, 57), // Space
    (0x2a, 47), // V
    (0x2b, 33), // F
    (0x2c, 20), // T
    (0x2d, 19), // R
    (0x2e, 6),  // 5
    (0x31, 49), // N
    (0x32, 48), // B
    (0x33, 35), // H
    (0x34, 34), // G
    (0x35, 21), // Y
    (0x36, 7),  // 6
    (0x3a, 50), // M
    (0x3b, 36), // J
    (0x3c, 22), // U
    (0x3d, 8),  // 7
    (0x3e, 9),  // 8
    (0x41, 51), // ,
    (0x42, 37), // K
    (0x43, 23), // I
    (0x44, 24), // O
    (0x45, 11), // 0
    (0x46, 10), // 9
    (0x49, 52), // .
    (0x4a, 53), // /
    (0x4b, 38), // L
    (0x4c, 39), // ;
    (0x4d, 25), // P
    (0x4e, 12), // -
    (0x52, 40), // '
    (0x54, 26), // [
    (0x55, 13), // =
    (0x58, 58), // CapsLock
    (0x59, 54), // right Shift
    (0x5a, 28), // Enter
    (0x5b, 27), // ]
    (0x5d, 43), // backslash
    (0x61, 86), // 102nd
    (0x66, 14), // Backspace
    (0x69, 79), // keypad 1
    (0x6b, 75), // keypad 4
    (0x6c, 71), // keypad 7
    (0x70, 82), // keypad 0
    (0x71, 83), // keypad .
    (0x72, 80), // keypad 2
    (0x73, 76), // keypad 5
    (0x74, 77), // keypad 6
    (0x75, 72), // keypad 8
    (0x76, 1),  // Esc
    (0x77, 69), // NumLock
    (0x78, 87), // F11
    (0x79, 78), // keypad +
    (0x7a, 81), // keypad 3
    (0x7b, 74), // keypad -
    (0x7c, 55), // keypad *
    (0x7d, 73), // keypad 9
    (0x7e, 70), // ScrollLock
    (0x83, 65), // F7
    (0x84, 99), // SysRq
    (0x88, 119), // Pause (synthetic)
    (0x91, 100), // right Alt
    (0x94, 97),  // right Ctrl
    (0x9f, 125), // left Meta
    (0xa7, 126), // right Meta
    (0xaf, 127), // Menu
    (0xca, 98),  // keypad /
    (0xda, 96),  // keypad Enter
    (0xe9, 107), // End
    (0xeb, 105), // Left
    (0xec, 102), // Home
    (0xf0, 110), // Insert
    (0xf1, 111), // Delete
    (0xf2, 108), // Down
    (0xf4, 106), // Right
    (0xf5, 103), // Up
    (0xfa, 109), // PageDown
    (0xfc, 99),  // PrintScreen
    (0xfd, 104), // PageUp
];

/// Default table for the multi byte (Model M) variant.
pub const SET2_KEYMAP: [u8; 256] = build(SET2_PAIRS);

/// Default table for the single byte (Model F) variant: identity over
/// the 7 bit identifier space.
pub const DIRECT_KEYMAP: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 0x80 {
        table[i] = i as u8;
        i += 1;
    }
    table
};

const fn build(pairs: &[(u8, u8)]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < pairs.len() {
        table[pairs[i].0 as usize] = pairs[i].1;
        i += 1;
    }
    table
}

#[cfg(test)]
#[path = "translate_test.rs"]
mod test;
