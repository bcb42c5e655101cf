//! Indicator traits

use crate::phase::Phase;

/// Trait for a single indicator lamp
///
/// Implementations drive an LED via GPIO, with whatever polarity the
/// board wiring needs.
pub trait IndicatorLamp {
    /// Light or extinguish the lamp
    fn set_lit(&mut self, lit: bool);

    /// Check if the lamp is currently lit
    fn is_lit(&self) -> bool;
}

/// Trait for the phase indicator outputs
///
/// The control loop calls [`drive`](IndicatorDriver::drive) once per phase
/// transition, never while a phase is sustained. Implementations must clear
/// every output before showing the new phase, so that at most one phase is
/// ever indicated.
pub trait IndicatorDriver {
    /// Show `phase` on the outputs
    fn drive(&mut self, phase: Phase);
}
