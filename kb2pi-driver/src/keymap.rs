/// Raw-identifier to output key-code table.
///
/// Installed in one step before reception is enabled and read only from
/// then on; the type deliberately has no mutating accessor, so a table
/// swap after start-up is a configuration error the compiler rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap([u8; 256]);

impl Keymap {
    pub const fn new(entries: [u8; 256]) -> Self {
        Self(entries)
    }

    /// Total over the whole byte range. Zero means "no mapped key"; the
    /// reporter suppresses such events.
    pub fn lookup(&self, raw_id: u8) -> u8 {
        self.0[raw_id as usize]
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self([0; 256])
    }
}

#[cfg(test)]
#[path = "keymap_test.rs"]
mod test;
