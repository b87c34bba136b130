//! Interface bring-up controller.

use super::{ArgValue, Capabilities, InterfaceRegistry, InterfaceRequest, NetifError, Role};
use crate::board::{BoardConfig, RadioConfig};
use crate::credentials::{ApCredentials, DEFAULT_AP_AUTH};
use crate::identity::{default_ap_ssid, DeviceIdSource};
use crate::radio::{ClockDivisor, IrqGuard, PinBinding, RadioCell, RadioDriver};
use log::{debug, info, warn};

/// Brings the WiFi co-processor up and hands out interface handles.
///
/// Each [`acquire`](Self::acquire) runs the same sequence:
///
/// 1. validate the request (no driver call on failure)
/// 2. bring the radio up, once per process
/// 3. program the default AP SSID, auth mode and passphrase
/// 4. rebind the bus pins with the interrupt suspended, if overrides were given
/// 5. program the clock divisor, if one with a non-zero integer part was given
/// 6. return the registry handle for the role
pub struct InterfaceController<D, S, R> {
    board: &'static BoardConfig,
    radio: RadioConfig,
    caps: Capabilities,
    cell: RadioCell<D>,
    ids: S,
    registry: R,
    active_pins: PinBinding,
    active_clock: ClockDivisor,
}

impl<D, S, R> InterfaceController<D, S, R>
where
    D: RadioDriver,
    S: DeviceIdSource,
    R: InterfaceRegistry,
{
    /// Create a controller for `board`. Nothing is sent to the driver yet.
    pub fn new(
        board: &'static BoardConfig,
        driver: D,
        ids: S,
        registry: R,
    ) -> Result<Self, NetifError> {
        let radio = *board
            .radio()
            .ok_or(NetifError::RadioUnavailable { board: board.name })?;
        ApCredentials::default_for(&radio, &ids.unique_id())?;

        let caps = Capabilities::detect(board);
        debug!(
            "{}: dynamic pins {}, dynamic clock {}",
            board.name, caps.dynamic_pins, caps.dynamic_clock
        );

        Ok(Self {
            board,
            radio,
            caps,
            cell: RadioCell::new(driver),
            ids,
            registry,
            active_pins: radio.pins,
            active_clock: radio.clock,
        })
    }

    /// Replace the detected capabilities.
    pub fn with_capabilities(mut self, caps: Capabilities) -> Self {
        self.caps = caps;
        self
    }

    /// Constructor entry point of the surrounding runtime.
    ///
    /// Takes at most one positional interface selector plus keyword
    /// overrides, see [`InterfaceRequest::parse`].
    pub fn make_new(
        &mut self,
        positional: &[ArgValue],
        keywords: &[(&str, ArgValue)],
    ) -> Result<R::Handle, NetifError> {
        let request = InterfaceRequest::parse(positional, keywords, self.board, &self.caps)?;
        self.acquire(&request)
    }

    /// Bring up (if needed), reconfigure and return the requested interface.
    pub fn acquire(&mut self, request: &InterfaceRequest) -> Result<R::Handle, NetifError> {
        request.validate(self.board, &self.caps)?;

        let driver = self.cell.ensure_initialized();

        let ssid = default_ap_ssid(self.radio.ssid_tag, &self.ids.unique_id());
        debug!("AP ssid {}", String::from_utf8_lossy(&ssid));
        driver.set_ap_ssid(&ssid);
        driver.set_ap_auth(DEFAULT_AP_AUTH);
        driver.set_ap_password(self.radio.ap_password.as_bytes());

        if !request.pins.is_empty() {
            let binding = request.pins.resolve(&self.radio.pins);
            {
                let mut irq = IrqGuard::suspend(&mut *driver);
                irq.set_pins(&binding);
            }
            info!("Radio bus rebound: {}", binding);
            self.active_pins = binding;
        }

        if let Some(divisor) = request.effective_clock() {
            driver.set_clock_divisor(divisor);
            self.active_clock = divisor;
            match self.bus_hz() {
                Some(hz) => info!("Radio bus clock divisor {} ({} Hz)", divisor, hz),
                None => warn!("Radio bus clock divisor {} out of range", divisor),
            }
        }

        info!("CYW43 {} interface ready", request.role);
        Ok(self.registry.interface(request.role))
    }

    /// Shorthand for acquiring a role with no overrides.
    pub fn interface(&mut self, role: Role) -> Result<R::Handle, NetifError> {
        self.acquire(&InterfaceRequest::new(role))
    }

    /// Pin binding currently driving the bus.
    pub fn active_pins(&self) -> PinBinding {
        self.active_pins
    }

    /// Clock divisor currently programmed.
    pub fn active_clock(&self) -> ClockDivisor {
        self.active_clock
    }

    /// Bus clock produced by the active divisor from the board system clock.
    pub fn bus_hz(&self) -> Option<u32> {
        self.active_clock.bus_hz(self.board.sys_clock_hz)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.is_initialized()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    pub fn board(&self) -> &'static BoardConfig {
        self.board
    }

    pub fn driver(&self) -> &D {
        self.cell.driver()
    }

    /// Credentials the AP is programmed with on every acquire.
    pub fn default_credentials(&self) -> ApCredentials {
        let ssid = default_ap_ssid(self.radio.ssid_tag, &self.ids.unique_id());
        ApCredentials {
            ssid: String::from_utf8_lossy(&ssid).into_owned(),
            password: self.radio.ap_password.to_string(),
            auth: DEFAULT_AP_AUTH,
        }
    }

    pub fn into_driver(self) -> D {
        self.cell.into_inner()
    }
}
