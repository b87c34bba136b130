//! Factory MAC backed identifier for ESP32 targets.

use super::{DeviceIdSource, UniqueDeviceId, UNIQUE_ID_LEN};
use esp_idf_sys::EspError;

/// Identifier read once from the base MAC burned into eFuse.
///
/// The 6-byte MAC occupies bytes 2..8 so the sampled SSID nibbles come from
/// the NIC specific part of the address.
#[derive(Debug, Clone, Copy)]
pub struct EfuseDeviceId(UniqueDeviceId);

impl EfuseDeviceId {
    pub fn read() -> Result<Self, EspError> {
        let mut mac = [0u8; 6];
        esp_idf_sys::esp!(unsafe { esp_idf_sys::esp_efuse_mac_get_default(mac.as_mut_ptr()) })?;

        let mut bytes = [0u8; UNIQUE_ID_LEN];
        bytes[2..].copy_from_slice(&mac);
        log::debug!("eFuse MAC {:02X?}", mac);
        Ok(Self(UniqueDeviceId::new(bytes)))
    }
}

impl DeviceIdSource for EfuseDeviceId {
    fn unique_id(&self) -> UniqueDeviceId {
        self.0
    }
}
