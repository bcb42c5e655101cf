//! Configuration types
//!
//! Board-agnostic configuration. Values are fixed at build time; the
//! firmware generates a `const IndicatorConfig` from its `indicator.toml`.

/// Default dead-zone threshold in raw sensor units
pub const DEFAULT_NOISE_THRESHOLD: i32 = 10;

/// Default control loop period
pub const DEFAULT_TICK_PERIOD_MS: u32 = 200;

/// Default apogee tone frequency
pub const DEFAULT_TONE_FREQUENCY_HZ: u32 = 1000;

/// Default apogee tone duration
pub const DEFAULT_TONE_DURATION_MS: u32 = 300;

/// Default diagnostic UART baud rate
pub const DEFAULT_DIAG_BAUD: u32 = 9600;

/// Errors found while validating a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period of zero
    ZeroTickPeriod,
    /// Tone frequency of zero
    ZeroToneFrequency,
    /// Tone duration of zero
    ZeroToneDuration,
    /// Diagnostics enabled with a baud rate of zero
    ZeroBaudRate,
    /// The same GPIO assigned to two functions
    DuplicatePin(u8),
}

/// Classifier and loop timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClassifierConfig {
    /// Deltas with a smaller magnitude are treated as zero
    pub noise_threshold: i32,
    /// Time between samples
    pub tick_period_ms: u32,
}

/// Apogee tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SounderConfig {
    /// Tone frequency
    pub frequency_hz: u32,
    /// Length of the single pulse played on entering apogee
    pub duration_ms: u32,
}

/// Indicator lamp wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LampConfig {
    /// Lamps are lit when their pin is LOW
    pub active_low: bool,
}

/// Diagnostic text output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiagnosticsConfig {
    /// Write diagnostic lines to the UART
    pub enabled: bool,
    /// UART baud rate
    pub baud_rate: u32,
    /// Write a line every tick, not only on transitions
    pub verbose: bool,
}

/// GPIO assignments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// Force sensor (must be ADC capable)
    pub sensor: u8,
    /// Ascending lamp
    pub ascend: u8,
    /// Apogee lamp
    pub apogee: u8,
    /// Descending lamp
    pub descend: u8,
    /// Sounder (PWM capable)
    pub sounder: u8,
    /// Diagnostic UART TX
    pub diag_tx: u8,
}

impl PinMap {
    /// All assigned pins, sensor first
    pub fn all(&self) -> [u8; 6] {
        [
            self.sensor,
            self.ascend,
            self.apogee,
            self.descend,
            self.sounder,
            self.diag_tx,
        ]
    }
}

/// Complete indicator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorConfig {
    pub classifier: ClassifierConfig,
    pub sounder: SounderConfig,
    pub lamps: LampConfig,
    pub diagnostics: DiagnosticsConfig,
    pub pins: PinMap,
}

impl IndicatorConfig {
    /// Reference wiring: sensor on ADC0, lamps on GPIO2-4, sounder on GPIO5
    ///
    /// The firmware's board pin map is this map.
    pub const DEFAULT: Self = Self {
        classifier: ClassifierConfig {
            noise_threshold: DEFAULT_NOISE_THRESHOLD,
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
        },
        sounder: SounderConfig {
            frequency_hz: DEFAULT_TONE_FREQUENCY_HZ,
            duration_ms: DEFAULT_TONE_DURATION_MS,
        },
        lamps: LampConfig { active_low: false },
        diagnostics: DiagnosticsConfig {
            enabled: true,
            baud_rate: DEFAULT_DIAG_BAUD,
            verbose: false,
        },
        pins: PinMap {
            sensor: 26,
            ascend: 2,
            apogee: 3,
            descend: 4,
            sounder: 5,
            diag_tx: 0,
        },
    };

    /// Check the configuration for values the control loop cannot honor
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.classifier.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }

        if self.sounder.frequency_hz == 0 {
            return Err(ConfigError::ZeroToneFrequency);
        }

        if self.sounder.duration_ms == 0 {
            return Err(ConfigError::ZeroToneDuration);
        }

        if self.diagnostics.enabled && self.diagnostics.baud_rate == 0 {
            return Err(ConfigError::ZeroBaudRate);
        }

        let pins = self.pins.all();
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Err(ConfigError::DuplicatePin(*pin));
            }
        }

        Ok(())
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(IndicatorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_timing() {
        let config = IndicatorConfig::DEFAULT;
        assert_eq!(config.classifier.noise_threshold, 10);
        assert_eq!(config.classifier.tick_period_ms, 200);
        assert_eq!(config.sounder.frequency_hz, 1000);
        assert_eq!(config.sounder.duration_ms, 300);
    }

    #[test]
    fn test_reference_wiring() {
        // The firmware takes exactly these peripherals
        let pins = IndicatorConfig::DEFAULT.pins;
        assert_eq!(pins.all(), [26, 2, 3, 4, 5, 0]);
        // Sounder on an odd GPIO: PWM channel B
        assert_eq!(pins.sounder % 2, 1);
    }

    #[test]
    fn test_pulse_may_outlast_tick() {
        // The sounder runs on its own; a pulse longer than a tick is fine
        let config = IndicatorConfig::DEFAULT;
        assert!(config.sounder.duration_ms > config.classifier.tick_period_ms);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_values_rejected() {
        let mut config = IndicatorConfig::DEFAULT;
        config.classifier.tick_period_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickPeriod));

        let mut config = IndicatorConfig::DEFAULT;
        config.sounder.frequency_hz = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroToneFrequency));

        let mut config = IndicatorConfig::DEFAULT;
        config.sounder.duration_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroToneDuration));

        let mut config = IndicatorConfig::DEFAULT;
        config.diagnostics.baud_rate = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroBaudRate));

        // Baud rate is irrelevant with diagnostics off
        config.diagnostics.enabled = false;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_pin_rejected() {
        let mut config = IndicatorConfig::DEFAULT;
        config.pins.descend = config.pins.apogee;
        assert_eq!(config.validate(), Err(ConfigError::DuplicatePin(3)));
    }
}
