//! Board-agnostic core logic for the flight phase indicator
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Phase classification from consecutive force readings
//! - Edge-triggered control loop state
//! - Indicator and sensor traits
//! - Configuration type definitions
//! - Diagnostic line rendering

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod diag;
pub mod phase;
pub mod traits;
