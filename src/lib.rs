//! CYW43 WiFi co-processor bring-up.
//!
//! This library turns a compile-time board table plus optional caller
//! overrides into a live station or access-point interface. Everything except
//! the driver itself is platform independent and is tested on the host
//! against the simulated backend in [`sim`].

pub mod board;
pub mod credentials;
pub mod identity;
pub mod netif;
pub mod radio;
pub mod sim;

// Re-export commonly used items
pub use board::{BoardConfig, BoardVariant};
pub use credentials::{ApCredentials, CredentialsError};
pub use identity::{DeviceIdSource, FixedDeviceId, UniqueDeviceId};
pub use netif::{
    ArgValue, Capabilities, InterfaceController, InterfaceRegistry, InterfaceRequest, NetifError,
    Role,
};
pub use radio::{AuthMode, ClockDivisor, PinBinding, PinRole, RadioDriver};
