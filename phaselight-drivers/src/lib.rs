//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in phaselight-core for the indicator hardware:
//!
//! - Indicator lamps on GPIO (active-high or active-low)
//! - Three-lamp phase indicator with apogee sounder
//! - Analog force sensor on an ADC channel
//! - Timed sounder pulses driven by posted commands

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod indicator;
pub mod sensor;
pub mod sounder;
