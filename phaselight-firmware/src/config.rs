//! Build-time configuration
//!
//! `build.rs` validates indicator.toml and turns it into the `CONFIG`
//! constant included below. Edit indicator.toml and rebuild to customize.

use phaselight_core::config::{
    ClassifierConfig, DiagnosticsConfig, IndicatorConfig, LampConfig, SounderConfig,
};

include!(concat!(env!("OUT_DIR"), "/indicator_config.rs"));
