//! Radio bus pin roles and their resolution.
//!
//! Every role resolves through the same chain:
//!
//! ```text
//! explicit override  ->  shared data pin (data roles only)  ->  board default
//! ```
//!
//! The shared data pin covers boards that multiplex data-out, data-in and
//! host-wake on one physical pin, like the Pico W's `WL_D`.

use std::fmt;

/// Logical signal on the radio bus.
///
/// The declaration order is the order of the driver's pin table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub enum PinRole {
    PowerOn,
    DataOut,
    DataIn,
    HostWake,
    Clock,
    ChipSelect,
}

impl PinRole {
    /// All roles, in driver pin table order.
    pub const ALL: [PinRole; 6] = [
        Self::PowerOn,
        Self::DataOut,
        Self::DataIn,
        Self::HostWake,
        Self::Clock,
        Self::ChipSelect,
    ];

    /// Position in the driver pin table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Keyword used by the binding layer for this role.
    pub const fn option_name(self) -> &'static str {
        match self {
            Self::PowerOn => "pin_on",
            Self::DataOut => "pin_out",
            Self::DataIn => "pin_in",
            Self::HostWake => "pin_wake",
            Self::Clock => "pin_clock",
            Self::ChipSelect => "pin_cs",
        }
    }

    /// Role falls back to the shared data pin before the board default.
    pub const fn follows_shared_data(self) -> bool {
        matches!(self, Self::DataOut | Self::DataIn | Self::HostWake)
    }
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.option_name())
    }
}

/// Complete role → GPIO mapping currently driving the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub struct PinBinding {
    pins: [u8; 6],
}

impl PinBinding {
    pub const fn new(on: u8, data_out: u8, data_in: u8, wake: u8, clock: u8, cs: u8) -> Self {
        Self {
            pins: [on, data_out, data_in, wake, clock, cs],
        }
    }

    pub const fn get(&self, role: PinRole) -> u8 {
        self.pins[role.index()]
    }

    /// Copy with one role rebound.
    pub const fn with(mut self, role: PinRole, gpio: u8) -> Self {
        self.pins[role.index()] = gpio;
        self
    }
}

impl fmt::Display for PinBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, role) in PinRole::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", role, self.get(*role))?;
        }
        Ok(())
    }
}

/// Caller-supplied partial pin binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinOverrides {
    explicit: [Option<u8>; 6],
    shared_data: Option<u8>,
}

impl PinOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, role: PinRole, gpio: u8) {
        self.explicit[role.index()] = Some(gpio);
    }

    pub fn set_shared_data(&mut self, gpio: u8) {
        self.shared_data = Some(gpio);
    }

    /// Explicit override for `role`, ignoring the shared data pin.
    pub fn get(&self, role: PinRole) -> Option<u8> {
        self.explicit[role.index()]
    }

    pub fn shared_data(&self) -> Option<u8> {
        self.shared_data
    }

    /// No pin was overridden at all.
    pub fn is_empty(&self) -> bool {
        self.shared_data.is_none() && self.explicit.iter().all(Option::is_none)
    }

    /// Resolve a single role against the compiled-in defaults.
    pub fn resolve_role(&self, role: PinRole, defaults: &PinBinding) -> u8 {
        self.get(role)
            .or_else(|| {
                if role.follows_shared_data() {
                    self.shared_data
                } else {
                    None
                }
            })
            .unwrap_or_else(|| defaults.get(role))
    }

    /// Effective binding: each role resolved independently.
    pub fn resolve(&self, defaults: &PinBinding) -> PinBinding {
        PinRole::ALL
            .iter()
            .fold(*defaults, |binding, &role| {
                binding.with(role, self.resolve_role(role, defaults))
            })
    }

    /// Every GPIO mentioned by this override set, with the keyword it came from.
    pub fn supplied(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        PinRole::ALL
            .into_iter()
            .filter_map(move |role| self.get(role).map(|gpio| (role.option_name(), gpio)))
            .chain(self.shared_data.map(|gpio| ("pin_dat", gpio)))
    }
}
