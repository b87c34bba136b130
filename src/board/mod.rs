//! Board configuration tables.
//!
//! Every supported board variant is described by one immutable [`BoardConfig`]
//! constant living in [`variants`]. Nothing here is mutated at runtime and no
//! accessor can fail: an optional resource that a board lacks (PSRAM chip
//! select, USB id, the WiFi co-processor itself) is simply `None`.
//!
//! The compiled-in board is picked by cargo feature, Pico W being the default:
//!
//! ```
//! use cyw43_netif::board::{BoardConfig, BoardVariant};
//!
//! let board = BoardConfig::active();
//! assert_eq!(board.variant, BoardVariant::active());
//! ```

mod variants;

pub use variants::{
    BOARDS, CYW43_DEFAULT_PINS, PICO2_W, PICO_W, SPARKFUN_IOTNODE_LORAWAN_RP2350,
    SPARKFUN_IOT_REDBOARD_ESP32,
};

use crate::radio::{ClockDivisor, PinBinding};

/// Physical board SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub enum BoardVariant {
    /// Raspberry Pi Pico W (RP2040 + CYW43439)
    PicoW,
    /// Raspberry Pi Pico 2 W (RP2350 + CYW43439)
    Pico2W,
    /// SparkFun IoT Node LoRaWAN (RP2350, PSRAM, no WiFi)
    SparkfunIotNodeLorawanRp2350,
    /// SparkFun IoT RedBoard (ESP32, on-die WiFi)
    SparkfunIotRedboardEsp32,
}

impl BoardVariant {
    /// Board selected at build time.
    pub fn active() -> Self {
        #[cfg(feature = "board-pico2-w")]
        return Self::Pico2W;
        #[cfg(feature = "board-sparkfun-iotnode-lorawan-rp2350")]
        return Self::SparkfunIotNodeLorawanRp2350;
        #[cfg(feature = "board-sparkfun-iot-redboard-esp32")]
        return Self::SparkfunIotRedboardEsp32;
        #[cfg(not(any(
            feature = "board-pico2-w",
            feature = "board-sparkfun-iotnode-lorawan-rp2350",
            feature = "board-sparkfun-iot-redboard-esp32"
        )))]
        Self::PicoW
    }

    /// Static configuration table for this variant.
    pub fn config(self) -> &'static BoardConfig {
        match self {
            Self::PicoW => &PICO_W,
            Self::Pico2W => &PICO2_W,
            Self::SparkfunIotNodeLorawanRp2350 => &SPARKFUN_IOTNODE_LORAWAN_RP2350,
            Self::SparkfunIotRedboardEsp32 => &SPARKFUN_IOT_REDBOARD_ESP32,
        }
    }
}

impl Default for BoardVariant {
    fn default() -> Self {
        Self::active()
    }
}

/// USB vendor/product id pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub struct UsbId {
    pub vid: u16,
    pub pid: u16,
}

/// Default pins of an I2C bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub struct I2cPins {
    pub sda: u8,
    pub scl: u8,
}

/// Default pins of an SPI bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub struct SpiPins {
    pub sck: u8,
    pub mosi: u8,
    pub miso: u8,
}

/// Default pins of a UART, flow control lines optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub struct UartPins {
    pub tx: u8,
    pub rx: u8,
    pub cts: Option<u8>,
    pub rts: Option<u8>,
}

/// External PSRAM wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub struct PsramConfig {
    pub enabled: bool,
    pub cs: Option<u8>,
}

impl PsramConfig {
    /// No PSRAM fitted.
    pub const NONE: Self = Self {
        enabled: false,
        cs: None,
    };
}

/// WiFi co-processor section of a board table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub struct RadioConfig {
    /// Compiled-in bus wiring.
    pub pins: PinBinding,
    /// Bus clock divisor the driver boots with.
    pub clock: ClockDivisor,
    /// Bus pins may be rebound at runtime.
    pub dynamic_pins: bool,
    /// Bus clock divisor may be changed at runtime.
    pub dynamic_clock: bool,
    /// First four bytes of the default access-point SSID.
    pub ssid_tag: [u8; 4],
    /// Default access-point passphrase.
    pub ap_password: &'static str,
}

/// Immutable hardware description of one board variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub struct BoardConfig {
    pub variant: BoardVariant,
    /// Human readable board name, also used for lookup.
    pub name: &'static str,
    pub mcu: &'static str,
    /// Default system clock, which the radio bus clock is divided from.
    pub sys_clock_hz: u32,
    /// Size of the user filesystem region; `None` means the port default.
    pub flash_storage_bytes: Option<u32>,
    pub usb: Option<UsbId>,
    /// Number of host GPIOs (valid pins are `0..gpio_count`).
    pub gpio_count: u8,
    /// REPL exposed on UART0 instead of native USB.
    pub uart_repl: bool,
    pub i2c: [Option<I2cPins>; 2],
    pub spi: [Option<SpiPins>; 2],
    pub uart: [Option<UartPins>; 2],
    pub psram: PsramConfig,
    /// Present only when the board carries the WiFi co-processor.
    pub radio: Option<RadioConfig>,
    /// Board specific pin names, matched case-insensitively.
    pub aliases: &'static [(&'static str, u8)],
}

impl BoardConfig {
    /// Board selected at build time.
    pub fn active() -> &'static BoardConfig {
        BoardVariant::active().config()
    }

    /// Find a board by name (case-insensitive).
    pub fn lookup(name: &str) -> Option<&'static BoardConfig> {
        BOARDS
            .iter()
            .copied()
            .find(|board| board.name.eq_ignore_ascii_case(name.trim()))
    }

    /// WiFi co-processor section, if fitted.
    pub fn radio(&self) -> Option<&RadioConfig> {
        self.radio.as_ref()
    }

    pub fn psram_enabled(&self) -> bool {
        self.psram.enabled
    }

    pub fn psram_cs(&self) -> Option<u8> {
        self.psram.cs
    }

    /// Whether `gpio` is a valid host pin number on this board.
    pub fn has_gpio(&self, gpio: u8) -> bool {
        gpio < self.gpio_count
    }

    /// Resolve a board alias such as `WL_CS` to its GPIO number.
    pub fn alias(&self, name: &str) -> Option<u8> {
        self.aliases
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|&(_, gpio)| gpio)
    }
}
