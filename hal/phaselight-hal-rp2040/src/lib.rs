//! RP2040-specific HAL for the flight phase indicator
//!
//! This crate provides RP2040-specific implementations of the shared
//! `phaselight-hal` traits, plus RP2040-specific functionality:
//!
//! - GPIO allocation (pin conflict checks at boot)
//! - ADC channel mapping and a blocking ADC input
//! - PWM-based tone generation for the sounder

#![no_std]

pub mod adc;
pub mod gpio;
pub mod pwm;

// Re-export shared traits from phaselight-hal for convenience
pub use phaselight_hal::{AdcReader, Beeper, OutputPin};
