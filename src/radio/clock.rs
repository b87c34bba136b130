//! Radio bus clock divisor.

use std::fmt;

/// PIO clock divisor of the radio bus: `integer + fraction / 256`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub struct ClockDivisor {
    pub integer: u16,
    pub fraction: u8,
}

impl ClockDivisor {
    /// Divisor the CYW43 bus driver boots with.
    pub const DEFAULT: Self = Self::new(2, 0);

    pub const fn new(integer: u16, fraction: u8) -> Self {
        Self { integer, fraction }
    }

    /// 16.8 fixed point form, as programmed into the PIO clock divider.
    pub const fn to_fixed_point(self) -> u32 {
        ((self.integer as u32) << 8) | self.fraction as u32
    }

    /// Bus clock produced from `system_hz`.
    ///
    /// The PIO program spends two cycles per bus clock edge pair, hence the
    /// extra factor of two. `None` for a zero divisor or a rate that does not
    /// fit in `u32` (fractional divisors below 1).
    pub fn bus_hz(self, system_hz: u32) -> Option<u32> {
        let fixed = u64::from(self.to_fixed_point());
        if fixed == 0 {
            return None;
        }
        u32::try_from(u64::from(system_hz) * 256 / (fixed * 2)).ok()
    }
}

impl Default for ClockDivisor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ClockDivisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}/256", self.integer, self.fraction)
    }
}
