//! Wire protocol constants for the two keyboard families.

/// AT set 2 protocol as spoken by the Model M family.
pub mod set2 {
    /// Keyboard overrun / self-test marker; carries no key.
    pub const OVERRUN: u8 = 0xff;
    /// Break lead-in: the next identifier is a release.
    pub const BREAK: u8 = 0xf0;
    /// Extended-key lead-in.
    pub const EXTENDED: u8 = 0xe0;
    /// First byte of the pause key's three byte sequence.
    pub const PAUSE: u8 = 0xe1;

    /// Added to an identifier that followed an [`EXTENDED`] lead-in so it
    /// cannot collide with the plain key sharing its low seven bits.
    pub const EXTENDED_BIT: u8 = 0x80;

    /// Synthetic identifier substituted for the whole pause sequence.
    /// 0x08 is unassigned in set 2, so 0x88 is free of extended keys too.
    pub const PAUSE_KEY: u8 = 0x88;

    /// True for bytes that modify decoding rather than naming a key.
    pub fn is_sentinel(byte: u8) -> bool {
        matches!(byte, OVERRUN | BREAK | EXTENDED | PAUSE)
    }
}

/// Single byte protocol spoken by the Model F family: one transition per
/// byte, no lead-ins.
pub mod direct {
    /// Set when the byte is a release.
    pub const BREAK_BIT: u8 = 0x80;
    /// Low bits carry the key identifier.
    pub const KEY_MASK: u8 = 0x7f;
}
