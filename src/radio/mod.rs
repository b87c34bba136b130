//! WiFi co-processor driver seam.
//!
//! This module contains:
//! - [`pins`]: bus pin roles, the active [`PinBinding`] and caller overrides
//! - [`clock`]: bus clock divisor
//! - [`cell`]: the process-wide bring-up flag, the driver owner that consults
//!   it and the interrupt guard used around a rebind
//!
//! The driver itself is external. [`RadioDriver`] lists the primitives this
//! crate calls through to; none of them can fail at this layer.

mod cell;
mod clock;
mod pins;

pub use cell::{InitFlag, IrqGuard, RadioCell, RADIO_INIT};
pub use clock::ClockDivisor;
pub use pins::{PinBinding, PinOverrides, PinRole};

use std::fmt;

/// Access-point authentication mode.
///
/// Raw values match the co-processor driver's `CYW43_AUTH_*` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub enum AuthMode {
    Open,
    WpaTkipPsk,
    Wpa2AesPsk,
    Wpa2MixedPsk,
}

impl AuthMode {
    pub fn as_raw(self) -> u32 {
        match self {
            Self::Open => 0,
            Self::WpaTkipPsk => 0x0020_0002,
            Self::Wpa2AesPsk => 0x0040_0004,
            Self::Wpa2MixedPsk => 0x0040_0006,
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::WpaTkipPsk => "WPA-TKIP-PSK",
            Self::Wpa2AesPsk => "WPA2-AES-PSK",
            Self::Wpa2MixedPsk => "WPA2-MIXED-PSK",
        };
        f.write_str(name)
    }
}

/// Primitives of the co-processor driver.
///
/// Each call is a thin call-through; the only contract imposed by this crate
/// is the order in which they are issued.
pub trait RadioDriver {
    /// Bring-up flag of the chip behind this driver. Defaults to the
    /// process-wide [`RADIO_INIT`].
    fn init_flag(&self) -> &InitFlag {
        &RADIO_INIT
    }

    /// Allocate driver state and power up the chip.
    fn init(&mut self);

    /// Register the interrupt handler and start the event pump.
    fn irq_enable(&mut self);

    /// Unregister the interrupt handler.
    fn irq_disable(&mut self);

    fn set_ap_ssid(&mut self, ssid: &[u8]);

    fn set_ap_auth(&mut self, auth: AuthMode);

    fn set_ap_password(&mut self, password: &[u8]);

    /// Rewire the bus. Must only be called with interrupts disabled.
    fn set_pins(&mut self, pins: &PinBinding);

    fn set_clock_divisor(&mut self, divisor: ClockDivisor);
}

impl<D: RadioDriver + ?Sized> RadioDriver for &mut D {
    fn init_flag(&self) -> &InitFlag {
        (**self).init_flag()
    }

    fn init(&mut self) {
        (**self).init()
    }

    fn irq_enable(&mut self) {
        (**self).irq_enable()
    }

    fn irq_disable(&mut self) {
        (**self).irq_disable()
    }

    fn set_ap_ssid(&mut self, ssid: &[u8]) {
        (**self).set_ap_ssid(ssid)
    }

    fn set_ap_auth(&mut self, auth: AuthMode) {
        (**self).set_ap_auth(auth)
    }

    fn set_ap_password(&mut self, password: &[u8]) {
        (**self).set_ap_password(password)
    }

    fn set_pins(&mut self, pins: &PinBinding) {
        (**self).set_pins(pins)
    }

    fn set_clock_divisor(&mut self, divisor: ClockDivisor) {
        (**self).set_clock_divisor(divisor)
    }
}
