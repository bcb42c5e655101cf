//! Flight phase inference
//!
//! A phase is inferred from the change between two consecutive readings.
//! The controller latches the last phase shown and only actuates on change.

pub mod classifier;
pub mod controller;

pub use classifier::{classify, Classification, Delta, Phase, RawReading};
pub use controller::{PhaseController, TickOutcome, Transition};
