//! GPIO indicator lamp
//!
//! An LED driven directly from a GPIO pin.

use phaselight_core::traits::IndicatorLamp;
use phaselight_hal::OutputPin;

/// GPIO indicator lamp
///
/// Controls an LED via a GPIO pin. The pin can be configured as
/// active-high (default) or active-low.
pub struct GpioLamp<P> {
    pin: P,
    /// If true, lamp lit = pin LOW
    inverted: bool,
    /// Current logical state (true = lit)
    lit: bool,
}

impl<P: OutputPin> GpioLamp<P> {
    /// Create a new GPIO lamp
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, lamp is lit when pin is LOW (LED wired to VCC)
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut lamp = Self {
            pin,
            inverted,
            lit: false,
        };
        // Ensure lamp starts dark
        lamp.set_lit(false);
        lamp
    }

    /// Create a new GPIO lamp with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new GPIO lamp with active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Get access to the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P: OutputPin> IndicatorLamp for GpioLamp<P> {
    fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
        // lit != inverted: active-high lit -> high, active-low lit -> low
        self.pin.set_state(lit != self.inverted);
    }

    fn is_lit(&self) -> bool {
        self.lit
    }
}
