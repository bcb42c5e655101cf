//! Hardware abstraction traits
//!
//! These traits define the interface between the control loop
//! and hardware-specific implementations.

pub mod indicator;
pub mod sensor;

pub use indicator::{IndicatorDriver, IndicatorLamp};
pub use sensor::ForceSensor;
