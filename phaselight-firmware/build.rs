//! Build script for phaselight-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates indicator.toml at compile time
//! - Generates the `CONFIG` constant from indicator.toml

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Linker scripts for cortex-m-rt, the RP2040 boot2 section and defmt
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Values read from indicator.toml
struct IndicatorToml {
    noise_threshold: i64,
    tick_period_ms: i64,
    frequency_hz: i64,
    duration_ms: i64,
    active_low: bool,
    diag_enabled: bool,
    diag_baud_rate: i64,
    diag_verbose: bool,
}

/// Validate indicator.toml configuration at compile time
fn validate_config() -> IndicatorToml {
    // Re-run if indicator.toml changes
    println!("cargo:rerun-if-changed=indicator.toml");

    let config_path = Path::new("indicator.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: indicator.toml not found!                                ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires an indicator.toml configuration file.     ║\n\
            ║  Please create one in the phaselight-firmware directory.         ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read indicator.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in indicator.toml                    ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    // [classifier] and [sounder] are required, [lamps] and [diagnostics] optional
    let noise_threshold = require_int(&config, "classifier", "noise_threshold", &mut errors);
    let tick_period_ms = require_int(&config, "classifier", "tick_period_ms", &mut errors);
    let frequency_hz = require_int(&config, "sounder", "frequency_hz", &mut errors);
    let duration_ms = require_int(&config, "sounder", "duration_ms", &mut errors);
    let active_low = optional_bool(&config, "lamps", "active_low", false, &mut errors);
    let diag_enabled = optional_bool(&config, "diagnostics", "enabled", true, &mut errors);
    let diag_baud_rate = optional_int(&config, "diagnostics", "baud_rate", 9600, &mut errors);
    let diag_verbose = optional_bool(&config, "diagnostics", "verbose", false, &mut errors);

    // Validate numeric ranges
    check_range(&mut errors, "classifier", "noise_threshold", noise_threshold, 0, 4095);
    check_range(&mut errors, "classifier", "tick_period_ms", tick_period_ms, 10, 60_000);
    check_range(&mut errors, "sounder", "frequency_hz", frequency_hz, 20, 20_000);
    check_range(&mut errors, "sounder", "duration_ms", duration_ms, 1, 10_000);
    check_range(&mut errors, "diagnostics", "baud_rate", diag_baud_rate, 300, 921_600);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid indicator configuration                          ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    if duration_ms > tick_period_ms {
        println!(
            "cargo:warning=sounder.duration_ms ({}) is longer than classifier.tick_period_ms ({})",
            duration_ms, tick_period_ms
        );
    }

    println!("cargo:warning=indicator.toml validated successfully");

    IndicatorToml {
        noise_threshold,
        tick_period_ms,
        frequency_hz,
        duration_ms,
        active_low,
        diag_enabled,
        diag_baud_rate,
        diag_verbose,
    }
}

/// Write `indicator_config.rs` into OUT_DIR
fn generate_config(config: &IndicatorToml) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let source = format!(
        "/// Configuration generated from indicator.toml\n\
        pub const CONFIG: IndicatorConfig = IndicatorConfig {{\n\
        \x20   classifier: ClassifierConfig {{\n\
        \x20       noise_threshold: {},\n\
        \x20       tick_period_ms: {},\n\
        \x20   }},\n\
        \x20   sounder: SounderConfig {{\n\
        \x20       frequency_hz: {},\n\
        \x20       duration_ms: {},\n\
        \x20   }},\n\
        \x20   lamps: LampConfig {{ active_low: {} }},\n\
        \x20   diagnostics: DiagnosticsConfig {{\n\
        \x20       enabled: {},\n\
        \x20       baud_rate: {},\n\
        \x20       verbose: {},\n\
        \x20   }},\n\
        \x20   pins: crate::board::PINS,\n\
        }};\n",
        config.noise_threshold,
        config.tick_period_ms,
        config.frequency_hz,
        config.duration_ms,
        config.active_low,
        config.diag_enabled,
        config.diag_baud_rate,
        config.diag_verbose,
    );

    fs::write(out_dir.join("indicator_config.rs"), source).unwrap();
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Look up `[section] key`
fn lookup<'a>(config: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    config.get(section).and_then(|s| s.get(key))
}

/// Read a required integer, recording an error if missing or mistyped
fn require_int(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> i64 {
    match lookup(config, section, key) {
        Some(toml::Value::Integer(v)) => *v,
        Some(_) => {
            errors.push(format!("[{}] '{}' must be an integer", section, key));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }
    }
}

/// Read an optional integer
fn optional_int(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: i64,
    errors: &mut Vec<String>,
) -> i64 {
    match lookup(config, section, key) {
        Some(toml::Value::Integer(v)) => *v,
        Some(_) => {
            errors.push(format!("[{}] '{}' must be an integer", section, key));
            default
        }
        None => default,
    }
}

/// Read an optional boolean
fn optional_bool(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: bool,
    errors: &mut Vec<String>,
) -> bool {
    match lookup(config, section, key) {
        Some(toml::Value::Boolean(v)) => *v,
        Some(_) => {
            errors.push(format!("[{}] '{}' must be true or false", section, key));
            default
        }
        None => default,
    }
}

/// Record an error if `value` is outside `min..=max`
fn check_range(
    errors: &mut Vec<String>,
    section: &str,
    key: &str,
    value: i64,
    min: i64,
    max: i64,
) {
    if value < min || value > max {
        errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
    }
}
