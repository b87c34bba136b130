//! Per-board constant tables.

use super::{
    BoardConfig, BoardVariant, I2cPins, PsramConfig, RadioConfig, SpiPins, UartPins, UsbId,
};
use crate::radio::{ClockDivisor, PinBinding};

/// CYW43439 wiring shared by the Pico W family.
///
/// | Signal | GPIO | Notes |
/// |--------|------|-------|
/// | WL_REG_ON | 23 | Power on |
/// | WL_D | 24 | Data out, data in and host wake share one pin |
/// | WL_CS | 25 | Chip select |
/// | WL_CLK | 29 | Bus clock |
pub const CYW43_DEFAULT_PINS: PinBinding = PinBinding::new(23, 24, 24, 24, 29, 25);

const PICO_W_RADIO: RadioConfig = RadioConfig {
    pins: CYW43_DEFAULT_PINS,
    clock: ClockDivisor::DEFAULT,
    dynamic_pins: true,
    dynamic_clock: true,
    ssid_tag: *b"PICO",
    ap_password: "picoW123",
};

const PICO_W_ALIASES: &[(&str, u8)] = &[("WL_ON", 23), ("WL_D", 24), ("WL_CS", 25), ("WL_CLK", 29)];

const RP2_I2C: [Option<I2cPins>; 2] = [
    Some(I2cPins { sda: 8, scl: 9 }),
    Some(I2cPins { sda: 6, scl: 7 }),
];

const RP2_SPI: [Option<SpiPins>; 2] = [
    Some(SpiPins {
        sck: 18,
        mosi: 19,
        miso: 16,
    }),
    Some(SpiPins {
        sck: 10,
        mosi: 11,
        miso: 12,
    }),
];

const RP2_UART: [Option<UartPins>; 2] = [
    Some(UartPins {
        tx: 0,
        rx: 1,
        cts: None,
        rts: None,
    }),
    Some(UartPins {
        tx: 4,
        rx: 5,
        cts: None,
        rts: None,
    }),
];

/// Raspberry Pi Pico W.
pub const PICO_W: BoardConfig = BoardConfig {
    variant: BoardVariant::PicoW,
    name: "Raspberry Pi Pico W",
    mcu: "RP2040",
    sys_clock_hz: 125_000_000,
    // 2 MiB flash less the 1200 KiB firmware region
    flash_storage_bytes: Some((2048 - 1200) * 1024),
    usb: Some(UsbId {
        vid: 0x2E8A,
        pid: 0x0005,
    }),
    gpio_count: 30,
    uart_repl: false,
    i2c: RP2_I2C,
    spi: RP2_SPI,
    uart: RP2_UART,
    psram: PsramConfig::NONE,
    radio: Some(PICO_W_RADIO),
    aliases: PICO_W_ALIASES,
};

/// Raspberry Pi Pico 2 W.
pub const PICO2_W: BoardConfig = BoardConfig {
    variant: BoardVariant::Pico2W,
    name: "Raspberry Pi Pico 2 W",
    mcu: "RP2350",
    sys_clock_hz: 150_000_000,
    // 4 MiB flash less the 1536 KiB firmware region
    flash_storage_bytes: Some((4096 - 1536) * 1024),
    usb: Some(UsbId {
        vid: 0x2E8A,
        pid: 0x0005,
    }),
    gpio_count: 30,
    uart_repl: false,
    i2c: RP2_I2C,
    spi: RP2_SPI,
    uart: RP2_UART,
    psram: PsramConfig::NONE,
    radio: Some(PICO_W_RADIO),
    aliases: PICO_W_ALIASES,
};

/// SparkFun IoT Node LoRaWAN (RP2350).
pub const SPARKFUN_IOTNODE_LORAWAN_RP2350: BoardConfig = BoardConfig {
    variant: BoardVariant::SparkfunIotNodeLorawanRp2350,
    name: "SparkFun IoT Node LoRaWAN",
    mcu: "RP2350",
    sys_clock_hz: 150_000_000,
    flash_storage_bytes: Some(14 * 1024 * 1024),
    usb: Some(UsbId {
        vid: 0x1B4F,
        pid: 0x0044,
    }),
    gpio_count: 30,
    uart_repl: false,
    i2c: [
        Some(I2cPins { sda: 20, scl: 21 }),
        Some(I2cPins { sda: 6, scl: 7 }),
    ],
    spi: [
        Some(SpiPins {
            sck: 2,
            mosi: 3,
            miso: 4,
        }),
        Some(SpiPins {
            sck: 14,
            mosi: 15,
            miso: 12,
        }),
    ],
    uart: [
        Some(UartPins {
            tx: 18,
            rx: 19,
            cts: Some(2),
            rts: Some(3),
        }),
        Some(UartPins {
            tx: 4,
            rx: 5,
            cts: Some(6),
            rts: Some(7),
        }),
    ],
    psram: PsramConfig {
        enabled: true,
        cs: Some(0),
    },
    radio: None,
    aliases: &[],
};

/// SparkFun IoT RedBoard ESP32.
///
/// WiFi lives on the ESP32 die, so there is no co-processor section.
pub const SPARKFUN_IOT_REDBOARD_ESP32: BoardConfig = BoardConfig {
    variant: BoardVariant::SparkfunIotRedboardEsp32,
    name: "SparkFun IoT RedBoard ESP32",
    mcu: "ESP32",
    sys_clock_hz: 240_000_000,
    flash_storage_bytes: None,
    usb: None,
    gpio_count: 40,
    uart_repl: true,
    i2c: [Some(I2cPins { sda: 21, scl: 22 }), None],
    spi: [
        Some(SpiPins {
            sck: 18,
            mosi: 23,
            miso: 19,
        }),
        None,
    ],
    uart: [
        Some(UartPins {
            tx: 1,
            rx: 3,
            cts: None,
            rts: None,
        }),
        None,
    ],
    psram: PsramConfig::NONE,
    radio: None,
    aliases: &[],
};

/// All known boards.
pub const BOARDS: &[&BoardConfig] = &[
    &PICO_W,
    &PICO2_W,
    &SPARKFUN_IOTNODE_LORAWAN_RP2350,
    &SPARKFUN_IOT_REDBOARD_ESP32,
];
