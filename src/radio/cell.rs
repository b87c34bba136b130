//! One-time bring-up state and interrupt guard.

use super::RadioDriver;
use log::{debug, info};
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};

/// "Radio has been brought up" flag.
///
/// Once set it stays set for the rest of the process.
#[derive(Debug, Default)]
pub struct InitFlag(AtomicBool);

impl InitFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Set the flag, returning `true` only for the caller that set it first.
    pub fn claim(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }
}

/// Bring-up flag of the co-processor attached to this host.
pub static RADIO_INIT: InitFlag = InitFlag::new();

/// Owner of the radio driver.
///
/// The driver is only handed out mutably through [`ensure_initialized`], so
/// nothing can talk to an uninitialized chip. Init side effects (driver state
/// allocation, interrupt registration) run at most once per process, however
/// many cells share the chip, because the flag lives behind
/// [`RadioDriver::init_flag`] and not in the cell.
///
/// [`ensure_initialized`]: RadioCell::ensure_initialized
pub struct RadioCell<D> {
    driver: D,
}

impl<D: RadioDriver> RadioCell<D> {
    pub const fn new(driver: D) -> Self {
        Self { driver }
    }

    pub fn is_initialized(&self) -> bool {
        self.driver.init_flag().is_set()
    }

    /// Bring the radio up if needed and return the driver.
    pub fn ensure_initialized(&mut self) -> &mut D {
        if self.driver.init_flag().claim() {
            info!("Bringing up WiFi co-processor");
            self.driver.init();
            self.driver.irq_enable();
        } else {
            debug!("WiFi co-processor already up");
        }
        &mut self.driver
    }

    /// Read-only view of the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn into_inner(self) -> D {
        self.driver
    }
}

/// Keeps the radio interrupt unregistered for as long as it lives.
///
/// Creating the guard disables the interrupt; dropping it re-enables it, so a
/// pin rebind done through the guard can never race the interrupt handler.
pub struct IrqGuard<'a, D: RadioDriver> {
    driver: &'a mut D,
}

impl<'a, D: RadioDriver> IrqGuard<'a, D> {
    pub fn suspend(driver: &'a mut D) -> Self {
        debug!("Radio interrupt suspended");
        driver.irq_disable();
        Self { driver }
    }
}

impl<D: RadioDriver> Deref for IrqGuard<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.driver
    }
}

impl<D: RadioDriver> DerefMut for IrqGuard<'_, D> {
    fn deref_mut(&mut self) -> &mut D {
        self.driver
    }
}

impl<D: RadioDriver> Drop for IrqGuard<'_, D> {
    fn drop(&mut self) {
        self.driver.irq_enable();
        debug!("Radio interrupt restored");
    }
}
