//! Phaselight Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the indicator drivers
//! are written against. Chip-specific HALs implement them so the same driver
//! code runs on the board and in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (phaselight-drivers)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  phaselight-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ phaselight-   │
//!             │  hal-rp2040   │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital outputs (indicator lamps)
//! - [`adc::AdcReader`] - Single-channel analog input (force sensor)
//! - [`tone::ToneOutput`] - Timed tone generation (sounder)
//! - [`tone::Beeper`] - Continuous tone generation (sounder hardware)

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod tone;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AdcReader};
pub use gpio::{EhOutput, OutputPin};
pub use tone::{Beeper, PwmTone, ToneOutput};
