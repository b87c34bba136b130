//! Runtime reconfiguration capabilities.

use crate::board::BoardConfig;

/// What the radio bus may be reconfigured with at runtime.
///
/// A capability is present only when the board wiring allows it and the
/// matching cargo feature (`dynamic-pins`, `dynamic-clock`) is compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub struct Capabilities {
    pub dynamic_pins: bool,
    pub dynamic_clock: bool,
}

impl Capabilities {
    pub fn detect(board: &BoardConfig) -> Self {
        match board.radio() {
            Some(radio) => Self {
                dynamic_pins: radio.dynamic_pins && cfg!(feature = "dynamic-pins"),
                dynamic_clock: radio.dynamic_clock && cfg!(feature = "dynamic-clock"),
            },
            None => Self::none(),
        }
    }

    pub const fn all() -> Self {
        Self {
            dynamic_pins: true,
            dynamic_clock: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            dynamic_pins: false,
            dynamic_clock: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PICO_W, SPARKFUN_IOT_REDBOARD_ESP32};

    #[test]
    fn test_board_without_radio_has_nothing() {
        assert_eq!(
            Capabilities::detect(&SPARKFUN_IOT_REDBOARD_ESP32),
            Capabilities::none()
        );
    }

    #[test]
    fn test_pico_w_follows_features() {
        let caps = Capabilities::detect(&PICO_W);
        assert_eq!(caps.dynamic_pins, cfg!(feature = "dynamic-pins"));
        assert_eq!(caps.dynamic_clock, cfg!(feature = "dynamic-clock"));
    }
}
