extern crate std;

use super::*;
use crate::scancode::set2;

#[test]
fn set2_letter_rows() {
    assert_eq!(SET2_KEYMAP[0x1c], 30); // A
    assert_eq!(SET2_KEYMAP[0x15], 16); // Q
    assert_eq!(SET2_KEYMAP[0x5a], 28); // Enter
    assert_eq!(SET2_KEYMAP[0x76], 1); // Esc
}

#[test]
fn set2_extended_keys() {
    assert_eq!(SET2_KEYMAP[0xf5], 103); // Up
    assert_eq!(SET2_KEYMAP[0xf2], 108); // Down
    assert_eq!(SET2_KEYMAP[0x94], 97); // right Ctrl
}

#[test]
fn pause_maps_to_linux_pause() {
    assert_eq!(SET2_KEYMAP[set2::PAUSE_KEY as usize], 119);
}

#[test]
fn extended_insert_shares_the_break_value_as_an_index() {
    // Identifier 0xf0 (extended 0x70) is reachable only after the
    // decoder strips the lead-ins; as a table index it is legitimate.
    assert_eq!(SET2_KEYMAP[0xf0], 110);
}

#[test]
fn unassigned_identifiers_stay_zero() {
    assert_eq!(SET2_KEYMAP[0x00], 0);
    assert_eq!(SET2_KEYMAP[0x02], 0);
    assert_eq!(SET2_KEYMAP[0xff], 0);
}

#[test]
fn direct_is_identity_over_low_half() {
    for i in 0..0x80 {
        assert_eq!(DIRECT_KEYMAP[i], i as u8);
    }
    for i in 0x80..0x100 {
        assert_eq!(DIRECT_KEYMAP[i], 0);
    }
}
