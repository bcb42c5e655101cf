//! Indicator implementations

pub mod gpio;
pub mod phase;

pub use gpio::GpioLamp;
pub use phase::{LampState, PhaseIndicator, PhaseLamps};
