//! Print the default access-point credentials of this device.
//!
//! On ESP32 the identifier comes from the factory MAC in eFuse, on the host
//! from `/etc/machine-id`.

use cyw43_netif::{ApCredentials, BoardConfig, DeviceIdSource, UniqueDeviceId};
use log::{error, info};

#[cfg(feature = "esp32")]
fn main() {
    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    match cyw43_netif::identity::EfuseDeviceId::read() {
        Ok(source) => report(source.unique_id()),
        Err(e) => error!("Failed to read eFuse MAC: {:?}", e),
    }
}

#[cfg(not(feature = "esp32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match cyw43_netif::identity::MachineDeviceId::load() {
        Ok(source) => report(source.unique_id()),
        Err(e) => {
            error!("Failed to read machine id: {}", e);
            std::process::exit(1);
        }
    }
}

fn report(id: UniqueDeviceId) {
    let board = BoardConfig::active();
    let Some(radio) = board.radio() else {
        error!("{} has no WiFi co-processor", board.name);
        return;
    };

    info!("Device id {}", id);
    match ApCredentials::default_for(radio, &id) {
        Ok(creds) => {
            println!("board:    {}", board.name);
            println!("ssid:     {}", creds.ssid);
            println!("password: {}", creds.password);
            println!("auth:     {}", creds.auth);
        }
        Err(e) => error!("Invalid default credentials: {}", e),
    }
}
