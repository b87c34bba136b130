//! Access-point credentials.
//!
//! The default credentials a board brings its AP up with are derived here: the
//! SSID from the board tag plus the device identifier, the passphrase from the
//! board configuration, and WPA2-AES-PSK as the security mode.
//!
//! A key is checked against the auth mode it is paired with:
//!
//! | Auth mode | Accepted key |
//! |-----------|--------------|
//! | `Open` | none |
//! | any PSK mode | 8..=63 printable ASCII characters, or 64 hex digits (raw PSK) |
//!
//! # Example
//!
//! ```
//! use cyw43_netif::board::PICO_W;
//! use cyw43_netif::credentials::ApCredentials;
//! use cyw43_netif::identity::UniqueDeviceId;
//!
//! let radio = PICO_W.radio().unwrap();
//! let id = UniqueDeviceId::new([0, 0, 0, 0, 0x0D, 0xC0, 0x0B, 0xA0]);
//! let creds = ApCredentials::default_for(radio, &id).unwrap();
//! assert_eq!(creds.ssid, "PICOABCD");
//! assert_eq!(creds.password, "picoW123");
//! ```

use crate::board::RadioConfig;
use crate::identity::{default_ap_ssid, UniqueDeviceId};
use crate::radio::AuthMode;
use std::fmt;
use std::ops::RangeInclusive;

/// SSID octets a beacon can carry.
pub const MAX_SSID_LEN: usize = 32;

/// Length of a WPA passphrase the driver hashes into a PSK.
pub const PASSPHRASE_LEN: RangeInclusive<usize> = 8..=63;

/// Length of a raw PSK given as hex.
pub const RAW_PSK_HEX_LEN: usize = 64;

/// Security mode the AP is brought up with.
pub const DEFAULT_AP_AUTH: AuthMode = AuthMode::Wpa2AesPsk;

/// SSID, key and security mode for the access-point interface.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub struct ApCredentials {
    pub ssid: String,
    /// Passphrase or raw hex PSK, empty for an open AP.
    pub password: String,
    pub auth: AuthMode,
}

impl ApCredentials {
    /// Credentials with an explicit auth mode.
    pub fn with_auth(
        ssid: impl Into<String>,
        password: impl Into<String>,
        auth: AuthMode,
    ) -> Result<Self, CredentialsError> {
        let creds = Self {
            ssid: ssid.into(),
            password: password.into(),
            auth,
        };
        creds.validate()?;
        Ok(creds)
    }

    /// Open AP for an empty key, [`DEFAULT_AP_AUTH`] otherwise.
    pub fn new(
        ssid: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let password = password.into();
        let auth = if password.is_empty() {
            AuthMode::Open
        } else {
            DEFAULT_AP_AUTH
        };
        Self::with_auth(ssid, password, auth)
    }

    /// Credentials a board's AP comes up with when nobody configured it.
    pub fn default_for(radio: &RadioConfig, id: &UniqueDeviceId) -> Result<Self, CredentialsError> {
        let ssid = default_ap_ssid(radio.ssid_tag, id);
        Self::with_auth(String::from_utf8_lossy(&ssid), radio.ap_password, DEFAULT_AP_AUTH)
    }

    pub fn validate(&self) -> Result<(), CredentialsError> {
        match self.ssid.len() {
            0 => return Err(CredentialsError::SsidEmpty),
            len if len > MAX_SSID_LEN => return Err(CredentialsError::SsidTooLong { len }),
            _ => {}
        }

        match (self.auth, self.password.len()) {
            (AuthMode::Open, 0) => Ok(()),
            (AuthMode::Open, _) => Err(CredentialsError::KeyOnOpenAp),
            (auth, 0) => Err(CredentialsError::MissingKey { auth }),
            (_, RAW_PSK_HEX_LEN) => {
                if self.password.bytes().all(|b| b.is_ascii_hexdigit()) {
                    Ok(())
                } else {
                    Err(CredentialsError::RawPskNotHex)
                }
            }
            (_, len) if PASSPHRASE_LEN.contains(&len) => {
                if self.password.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
                    Ok(())
                } else {
                    Err(CredentialsError::PassphraseNotPrintable)
                }
            }
            (_, len) => Err(CredentialsError::KeyLength { len }),
        }
    }

    pub fn is_open(&self) -> bool {
        self.auth == AuthMode::Open
    }
}

impl fmt::Display for ApCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ssid={} auth={}", self.ssid, self.auth)
    }
}

/// Errors validating [`ApCredentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    SsidEmpty,
    SsidTooLong { len: usize },
    /// Open AP given a key.
    KeyOnOpenAp,
    /// PSK mode without a key.
    MissingKey { auth: AuthMode },
    /// Neither a passphrase nor a raw PSK.
    KeyLength { len: usize },
    /// 64 characters but not all hex digits.
    RawPskNotHex,
    PassphraseNotPrintable,
}

impl fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SsidEmpty => write!(f, "SSID cannot be empty"),
            Self::SsidTooLong { len } => {
                write!(f, "SSID is {} bytes, beacons carry at most {}", len, MAX_SSID_LEN)
            }
            Self::KeyOnOpenAp => write!(f, "open AP cannot have a key"),
            Self::MissingKey { auth } => write!(f, "{} needs a key", auth),
            Self::KeyLength { len } => write!(
                f,
                "key is {} characters, expected {}-{} or a {} digit hex PSK",
                len,
                PASSPHRASE_LEN.start(),
                PASSPHRASE_LEN.end(),
                RAW_PSK_HEX_LEN
            ),
            Self::RawPskNotHex => write!(f, "{} character key must be hex", RAW_PSK_HEX_LEN),
            Self::PassphraseNotPrintable => write!(f, "passphrase must be printable ASCII"),
        }
    }
}

impl std::error::Error for CredentialsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PICO_W;

    // ==================== Auth Pairing Tests ====================

    #[test]
    fn test_passphrase_selects_wpa2() {
        let creds = ApCredentials::new("PICO1234", "picoW123").unwrap();
        assert_eq!(creds.auth, AuthMode::Wpa2AesPsk);
        assert!(!creds.is_open());
    }

    #[test]
    fn test_empty_key_selects_open() {
        let creds = ApCredentials::new("OpenAP", "").unwrap();
        assert!(creds.is_open());
        assert_eq!(creds.auth, AuthMode::Open);
    }

    #[test]
    fn test_open_ap_with_key() {
        assert_eq!(
            ApCredentials::with_auth("AP", "picoW123", AuthMode::Open),
            Err(CredentialsError::KeyOnOpenAp)
        );
    }

    #[test]
    fn test_psk_mode_without_key() {
        assert_eq!(
            ApCredentials::with_auth("AP", "", AuthMode::Wpa2MixedPsk),
            Err(CredentialsError::MissingKey {
                auth: AuthMode::Wpa2MixedPsk
            })
        );
    }

    // ==================== SSID Tests ====================

    #[test]
    fn test_ssid_limits() {
        assert_eq!(
            ApCredentials::new("", "picoW123"),
            Err(CredentialsError::SsidEmpty)
        );
        assert!(ApCredentials::new("a".repeat(32), "picoW123").is_ok());
        assert_eq!(
            ApCredentials::new("a".repeat(33), "picoW123"),
            Err(CredentialsError::SsidTooLong { len: 33 })
        );
    }

    // ==================== Key Tests ====================

    #[test]
    fn test_passphrase_length() {
        assert_eq!(
            ApCredentials::new("AP", "short"),
            Err(CredentialsError::KeyLength { len: 5 })
        );
        assert!(ApCredentials::new("AP", "12345678").is_ok());
        assert!(ApCredentials::new("AP", "a".repeat(63)).is_ok());
        assert_eq!(
            ApCredentials::new("AP", "a".repeat(65)),
            Err(CredentialsError::KeyLength { len: 65 })
        );
    }

    #[test]
    fn test_raw_psk() {
        assert!(ApCredentials::new("AP", "0123456789abcdef".repeat(4)).is_ok());
        assert_eq!(
            ApCredentials::new("AP", "g".repeat(64)),
            Err(CredentialsError::RawPskNotHex)
        );
    }

    #[test]
    fn test_passphrase_printable() {
        assert_eq!(
            ApCredentials::new("AP", "pass\tword"),
            Err(CredentialsError::PassphraseNotPrintable)
        );
    }

    // ==================== Default Tests ====================

    #[test]
    fn test_default_for_pico_w() {
        let radio = PICO_W.radio().unwrap();
        let id = UniqueDeviceId::new([0xE6, 0x61, 0x38, 0x97, 0x13, 0x45, 0x2F, 0x2C]);
        let creds = ApCredentials::default_for(radio, &id).unwrap();
        assert_eq!(creds.ssid, "PICO2F43");
        assert_eq!(creds.password, "picoW123");
        assert_eq!(creds.auth, DEFAULT_AP_AUTH);
        assert_eq!(creds.to_string(), "ssid=PICO2F43 auth=WPA2-AES-PSK");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CredentialsError::KeyLength { len: 3 }.to_string(),
            "key is 3 characters, expected 8-63 or a 64 digit hex PSK"
        );
        assert_eq!(
            CredentialsError::MissingKey {
                auth: AuthMode::Wpa2AesPsk
            }
            .to_string(),
            "WPA2-AES-PSK needs a key"
        );
    }
}
