//! Host-side simulated backend.
//!
//! On the host there is no co-processor. [`SimRadio`] stands in for the
//! driver and records every primitive it receives, which is what the tests and
//! the `netif-sim` tool inspect. [`SimRegistry`] hands out the two interface
//! singletons.

use crate::netif::{InterfaceRegistry, Role};
use crate::radio::{AuthMode, ClockDivisor, InitFlag, PinBinding, RadioDriver};
use log::{trace, warn};
use std::fmt;

/// One driver primitive as received by [`SimRadio`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub enum DriverCall {
    Init,
    IrqEnable,
    IrqDisable,
    SetApSsid(Vec<u8>),
    SetApAuth(AuthMode),
    SetApPassword(Vec<u8>),
    SetPins(PinBinding),
    SetClockDivisor(ClockDivisor),
}

impl fmt::Display for DriverCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::IrqEnable => write!(f, "irq_enable"),
            Self::IrqDisable => write!(f, "irq_disable"),
            Self::SetApSsid(ssid) => write!(f, "set_ap_ssid({})", String::from_utf8_lossy(ssid)),
            Self::SetApAuth(auth) => {
                write!(f, "set_ap_auth({}, {:#010x})", auth, auth.as_raw())
            }
            Self::SetApPassword(password) => write!(f, "set_ap_password({} bytes)", password.len()),
            Self::SetPins(pins) => write!(f, "set_pins({})", pins),
            Self::SetClockDivisor(divisor) => write!(f, "set_clock_divisor({})", divisor),
        }
    }
}

/// Recording stand-in for the co-processor driver.
///
/// Each instance models a separately booted device, so it carries its own
/// bring-up flag instead of the process-wide one.
#[derive(Debug, Default)]
pub struct SimRadio {
    init: InitFlag,
    calls: Vec<DriverCall>,
    irq_enabled: bool,
    live_rebinds: usize,
}

impl SimRadio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every primitive received so far, oldest first.
    pub fn calls(&self) -> &[DriverCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DriverCall> {
        self.calls
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&DriverCall) -> bool) -> usize {
        self.calls.iter().filter(|&call| pred(call)).count()
    }

    /// Index of the first recorded call matching `pred`.
    pub fn position(&self, pred: impl Fn(&DriverCall) -> bool) -> Option<usize> {
        self.calls.iter().position(pred)
    }

    pub fn irq_enabled(&self) -> bool {
        self.irq_enabled
    }

    /// Pin rebinds received while the interrupt was registered.
    pub fn live_rebinds(&self) -> usize {
        self.live_rebinds
    }

    /// Last pin table received, if any.
    pub fn pins(&self) -> Option<PinBinding> {
        self.calls.iter().rev().find_map(|call| match call {
            DriverCall::SetPins(pins) => Some(*pins),
            _ => None,
        })
    }

    /// Last AP SSID received, if any.
    pub fn ap_ssid(&self) -> Option<&[u8]> {
        self.calls.iter().rev().find_map(|call| match call {
            DriverCall::SetApSsid(ssid) => Some(ssid.as_slice()),
            _ => None,
        })
    }

    fn record(&mut self, call: DriverCall) {
        trace!("sim radio: {}", call);
        self.calls.push(call);
    }
}

impl RadioDriver for SimRadio {
    fn init_flag(&self) -> &InitFlag {
        &self.init
    }

    fn init(&mut self) {
        self.record(DriverCall::Init);
    }

    fn irq_enable(&mut self) {
        self.irq_enabled = true;
        self.record(DriverCall::IrqEnable);
    }

    fn irq_disable(&mut self) {
        self.irq_enabled = false;
        self.record(DriverCall::IrqDisable);
    }

    fn set_ap_ssid(&mut self, ssid: &[u8]) {
        self.record(DriverCall::SetApSsid(ssid.to_vec()));
    }

    fn set_ap_auth(&mut self, auth: AuthMode) {
        self.record(DriverCall::SetApAuth(auth));
    }

    fn set_ap_password(&mut self, password: &[u8]) {
        self.record(DriverCall::SetApPassword(password.to_vec()));
    }

    fn set_pins(&mut self, pins: &PinBinding) {
        if self.irq_enabled {
            warn!("sim radio: pins rebound with interrupt live");
            self.live_rebinds += 1;
        }
        self.record(DriverCall::SetPins(*pins));
    }

    fn set_clock_divisor(&mut self, divisor: ClockDivisor) {
        self.record(DriverCall::SetClockDivisor(divisor));
    }
}

/// Interface handle handed out by [`SimRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_os = "espidf"), derive(serde::Serialize))]
pub struct SimInterface {
    pub role: Role,
}

impl fmt::Display for SimInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<CYW43 {}>", self.role.short_name())
    }
}

/// Registry holding the station and access-point singletons.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimRegistry;

impl InterfaceRegistry for SimRegistry {
    type Handle = SimInterface;

    fn interface(&self, role: Role) -> SimInterface {
        SimInterface { role }
    }
}
