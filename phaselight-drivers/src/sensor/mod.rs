//! Sensor implementations

pub mod analog;

pub use analog::AnalogForceSensor;
