//! Network interface bring-up.
//!
//! This module contains:
//! - [`InterfaceController`]: turns a board table plus optional overrides
//!   into a live station or access-point interface
//! - [`InterfaceRequest`] and [`ArgValue`]: the validated request and the
//!   loosely typed constructor arguments it is parsed from
//! - [`Capabilities`]: which runtime overrides the build supports
//! - [`NetifError`]: every way a request can be rejected
//!
//! # Example
//!
//! ```
//! use cyw43_netif::board::PICO_W;
//! use cyw43_netif::identity::{FixedDeviceId, UniqueDeviceId};
//! use cyw43_netif::netif::{ArgValue, InterfaceController, Role};
//! use cyw43_netif::sim::{SimRadio, SimRegistry};
//!
//! let ids = FixedDeviceId(UniqueDeviceId::new([0; 8]));
//! let mut netif = InterfaceController::new(&PICO_W, SimRadio::new(), ids, SimRegistry).unwrap();
//!
//! let ap = netif.make_new(&[ArgValue::Int(1)], &[]).unwrap();
//! assert_eq!(ap.role, Role::AccessPoint);
//! ```

mod args;
mod capability;
mod controller;
mod error;

pub use args::{ArgValue, InterfaceRequest};
pub use capability::Capabilities;
pub use controller::InterfaceController;
pub use error::NetifError;

/// Interface role, the driver's `CYW43_ITF_*` index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub enum Role {
    #[default]
    Station,
    AccessPoint,
}

impl Role {
    /// Map the constructor's integer selector to a role.
    pub fn from_raw(raw: i64) -> Result<Self, NetifError> {
        match raw {
            0 => Ok(Self::Station),
            1 => Ok(Self::AccessPoint),
            other => Err(NetifError::InvalidRole(other)),
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Self::Station => "STA",
            Self::AccessPoint => "AP",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Generic network-interface layer that owns the two role singletons.
///
/// Looking up a role always succeeds.
pub trait InterfaceRegistry {
    type Handle;

    fn interface(&self, role: Role) -> Self::Handle;
}

impl<R: InterfaceRegistry + ?Sized> InterfaceRegistry for &R {
    type Handle = R::Handle;

    fn interface(&self, role: Role) -> Self::Handle {
        (**self).interface(role)
    }
}
