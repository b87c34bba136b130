//! Unique device identifier and the default AP SSID derived from it.
//!
//! The SSID is the board's 4-byte product tag followed by four hex digits
//! sampled from the identifier:
//!
//! | SSID byte | Source |
//! |-----------|--------|
//! | 4 | high nibble of `id[7]` |
//! | 5 | low nibble of `id[6]` |
//! | 6 | high nibble of `id[5]` |
//! | 7 | low nibble of `id[4]` |
//!
//! Deployed devices already broadcast SSIDs built this way, so the mapping
//! must not change.
//!
//! # Example
//!
//! ```
//! use cyw43_netif::identity::{default_ap_ssid, UniqueDeviceId};
//!
//! let id = UniqueDeviceId::new([0, 0, 0, 0, 0x0D, 0xC0, 0x0B, 0xA0]);
//! assert_eq!(&default_ap_ssid(*b"PICO", &id), b"PICOABCD");
//! ```

#[cfg(feature = "esp32")]
mod efuse;

#[cfg(feature = "esp32")]
pub use efuse::EfuseDeviceId;

use std::fmt;

/// Length of the platform unique identifier in bytes.
pub const UNIQUE_ID_LEN: usize = 8;

/// Length of the derived default SSID in bytes.
pub const DEFAULT_SSID_LEN: usize = 8;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Opaque per-device identifier provided by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniqueDeviceId([u8; UNIQUE_ID_LEN]);

impl UniqueDeviceId {
    pub const fn new(bytes: [u8; UNIQUE_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; UNIQUE_ID_LEN] {
        &self.0
    }

    /// Parse a 16 digit hex string (separators `:` and `-` are ignored).
    pub fn from_hex(s: &str) -> Result<Self, ParseIdError> {
        let digits: Vec<u8> = s
            .trim()
            .bytes()
            .filter(|b| *b != b':' && *b != b'-')
            .collect();
        if digits.len() != UNIQUE_ID_LEN * 2 {
            return Err(ParseIdError::Length {
                len: digits.len(),
                expected: UNIQUE_ID_LEN * 2,
            });
        }

        let mut bytes = [0u8; UNIQUE_ID_LEN];
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks(2)) {
            let hi = hex_value(pair[0]).ok_or(ParseIdError::Digit(pair[0] as char))?;
            let lo = hex_value(pair[1]).ok_or(ParseIdError::Digit(pair[1] as char))?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for UniqueDeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

fn hex_value(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|v| v as u8)
}

/// Errors parsing a [`UniqueDeviceId`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIdError {
    /// Wrong number of hex digits.
    Length { len: usize, expected: usize },
    /// Character is not a hex digit.
    Digit(char),
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { len, expected } => {
                write!(f, "expected {} hex digits, got {}", expected, len)
            }
            Self::Digit(c) => write!(f, "invalid hex digit '{}'", c),
        }
    }
}

impl std::error::Error for ParseIdError {}

/// Platform accessor for the unique identifier. Always available.
pub trait DeviceIdSource {
    fn unique_id(&self) -> UniqueDeviceId;
}

impl<S: DeviceIdSource + ?Sized> DeviceIdSource for &S {
    fn unique_id(&self) -> UniqueDeviceId {
        (**self).unique_id()
    }
}

/// Identifier known up front (tests, simulation, provisioning tools).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDeviceId(pub UniqueDeviceId);

impl DeviceIdSource for FixedDeviceId {
    fn unique_id(&self) -> UniqueDeviceId {
        self.0
    }
}

/// Host identifier taken from the first 8 bytes of `/etc/machine-id`.
#[cfg(not(target_os = "espidf"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineDeviceId(UniqueDeviceId);

#[cfg(not(target_os = "espidf"))]
impl MachineDeviceId {
    pub const PATH: &'static str = "/etc/machine-id";

    pub fn load() -> std::io::Result<Self> {
        Self::load_from(Self::PATH)
    }

    pub fn load_from(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let prefix = contents.trim().get(..UNIQUE_ID_LEN * 2).unwrap_or_default();
        UniqueDeviceId::from_hex(prefix)
            .map(Self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(not(target_os = "espidf"))]
impl DeviceIdSource for MachineDeviceId {
    fn unique_id(&self) -> UniqueDeviceId {
        self.0
    }
}

/// Four hex digits sampled from the identifier.
pub fn ssid_suffix(id: &UniqueDeviceId) -> [u8; 4] {
    let id = id.as_bytes();
    [
        HEX_DIGITS[(id[7] >> 4) as usize],
        HEX_DIGITS[(id[6] & 0x0F) as usize],
        HEX_DIGITS[(id[5] >> 4) as usize],
        HEX_DIGITS[(id[4] & 0x0F) as usize],
    ]
}

/// Default access-point SSID: product tag followed by [`ssid_suffix`].
pub fn default_ap_ssid(tag: [u8; 4], id: &UniqueDeviceId) -> [u8; DEFAULT_SSID_LEN] {
    let suffix = ssid_suffix(id);
    let mut ssid = [0u8; DEFAULT_SSID_LEN];
    ssid[..4].copy_from_slice(&tag);
    ssid[4..].copy_from_slice(&suffix);
    ssid
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Derivation Tests ====================

    #[test]
    fn test_suffix_sampling() {
        let id = UniqueDeviceId::new([0, 0, 0, 0, 0x0D, 0xC0, 0x0B, 0xA0]);
        assert_eq!(&ssid_suffix(&id), b"ABCD");
    }

    #[test]
    fn test_ssid_deterministic() {
        let id = UniqueDeviceId::new([0xE6, 0x61, 0x38, 0x97, 0x13, 0x45, 0x2F, 0x2C]);
        let first = default_ap_ssid(*b"PICO", &id);
        let second = default_ap_ssid(*b"PICO", &id);
        assert_eq!(first, second);
        assert_eq!(&first, b"PICO2F43");
    }

    #[test]
    fn test_sampled_nibbles_change_ssid() {
        let a = UniqueDeviceId::new([0; 8]);
        let b = UniqueDeviceId::new([0, 0, 0, 0, 0, 0, 0, 0x10]);
        let c = UniqueDeviceId::new([0, 0, 0, 0, 0x01, 0, 0, 0]);
        assert_ne!(default_ap_ssid(*b"PICO", &a), default_ap_ssid(*b"PICO", &b));
        assert_ne!(default_ap_ssid(*b"PICO", &a), default_ap_ssid(*b"PICO", &c));
    }

    #[test]
    fn test_unsampled_nibbles_ignored() {
        // Low nibble of id[7], high nibble of id[6] and bytes 0..4 are not sampled
        let a = UniqueDeviceId::new([0; 8]);
        let b = UniqueDeviceId::new([0xFF, 0xFF, 0xFF, 0xFF, 0xF0, 0x0F, 0xF0, 0x0F]);
        assert_eq!(default_ap_ssid(*b"PICO", &a), default_ap_ssid(*b"PICO", &b));
    }

    #[test]
    fn test_ssid_length() {
        let ssid = default_ap_ssid(*b"PICO", &UniqueDeviceId::new([0xFF; 8]));
        assert_eq!(ssid.len(), DEFAULT_SSID_LEN);
        assert_eq!(&ssid, b"PICOFFFF");
    }

    // ==================== Parsing Tests ====================

    #[test]
    fn test_from_hex() {
        let id = UniqueDeviceId::from_hex("e6:61:38:97:13:45:2f:2c").unwrap();
        assert_eq!(id.as_bytes(), &[0xE6, 0x61, 0x38, 0x97, 0x13, 0x45, 0x2F, 0x2C]);
        assert_eq!(id.to_string(), "E661389713452F2C");
    }

    #[test]
    fn test_from_hex_wrong_length() {
        assert_eq!(
            UniqueDeviceId::from_hex("abcd"),
            Err(ParseIdError::Length {
                len: 4,
                expected: 16
            })
        );
    }

    #[test]
    fn test_from_hex_bad_digit() {
        assert_eq!(
            UniqueDeviceId::from_hex("zz00000000000000"),
            Err(ParseIdError::Digit('z'))
        );
    }

    // ==================== Source Tests ====================

    #[test]
    fn test_fixed_source() {
        let id = UniqueDeviceId::new([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(FixedDeviceId(id).unique_id(), id);
        assert_eq!((&FixedDeviceId(id)).unique_id(), id);
    }

    #[test]
    fn test_machine_id_from_file() {
        let path = std::env::temp_dir().join(format!("netif-machine-id-{}", std::process::id()));
        std::fs::write(&path, "0123456789abcdef0123456789abcdef\n").unwrap();
        let source = MachineDeviceId::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            source.unique_id().as_bytes(),
            &[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]
        );
    }

    #[test]
    fn test_machine_id_short_file() {
        let path = std::env::temp_dir().join(format!("netif-short-id-{}", std::process::id()));
        std::fs::write(&path, "0123").unwrap();
        let result = MachineDeviceId::load_from(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::InvalidData);
    }
}
