use crate::keymap::Keymap;

pub const KEYMAP_LEN: usize = 256;
/// 256 table bytes followed by a little-endian u32 divisor.
pub const BLOB_LEN: usize = KEYMAP_LEN + 4;

#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    Truncated,
    BadDivisor,
}

/// Start-up parameters handed over by the platform: the translation
/// table and the clock divisor found by the offline calibration tool.
#[derive(Debug)]
pub struct DriverConfig {
    pub keymap: Keymap,
    pub divisor: u16,
}

impl DriverConfig {
    pub fn new(keymap: Keymap, divisor: u32) -> Result<Self, ConfigError> {
        // the mini UART baud register is 16 bits wide
        if divisor == 0 || divisor > u16::MAX as u32 {
            return Err(ConfigError::BadDivisor);
        }
        Ok(Self {
            keymap,
            divisor: divisor as u16,
        })
    }

    /// Parses the platform blob, the flat equivalent of the original
    /// overlay's `translate` and `divider` properties.
    pub fn from_blob(blob: &[u8]) -> Result<Self, ConfigError> {
        if blob.len() < BLOB_LEN {
            return Err(ConfigError::Truncated);
        }
        let mut entries = [0u8; KEYMAP_LEN];
        entries.copy_from_slice(&blob[..KEYMAP_LEN]);
        let divisor = u32::from_le_bytes(blob[KEYMAP_LEN..BLOB_LEN].try_into().unwrap());
        Self::new(Keymap::new(entries), divisor)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod test;
