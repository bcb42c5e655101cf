//! Analog force sensor
//!
//! Force-sensitive resistor (or load cell amplifier) read through one ADC
//! channel. Readings are passed through in the converter's native units;
//! there is no calibration.

use phaselight_core::phase::RawReading;
use phaselight_core::traits::ForceSensor;
use phaselight_hal::AdcReader;

/// Force sensor on a single ADC channel
///
/// A failed conversion reads as zero, indistinguishable from no force.
pub struct AnalogForceSensor<ADC> {
    adc: ADC,
}

impl<ADC: AdcReader> AnalogForceSensor<ADC> {
    /// Create a new sensor on `adc`
    pub fn new(adc: ADC) -> Self {
        Self { adc }
    }

    /// Release the ADC channel
    pub fn into_inner(self) -> ADC {
        self.adc
    }
}

impl<ADC: AdcReader> ForceSensor for AnalogForceSensor<ADC> {
    fn read_raw(&mut self) -> RawReading {
        self.adc.read().map(RawReading::from).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phaselight_hal::AdcError;

    /// Mock ADC replaying a fixed sequence
    struct MockAdc {
        samples: Vec<Result<u16, AdcError>>,
    }

    impl AdcReader for MockAdc {
        fn read(&mut self) -> Result<u16, AdcError> {
            self.samples.remove(0)
        }
    }

    #[test]
    fn test_passes_native_units() {
        let mut sensor = AnalogForceSensor::new(MockAdc {
            samples: vec![Ok(0), Ok(512), Ok(4095)],
        });

        assert_eq!(sensor.read_raw(), 0);
        assert_eq!(sensor.read_raw(), 512);
        assert_eq!(sensor.read_raw(), 4095);
    }

    #[test]
    fn test_failed_read_is_zero() {
        let mut sensor = AnalogForceSensor::new(MockAdc {
            samples: vec![Ok(700), Err(AdcError::ConversionError), Ok(700)],
        });

        assert_eq!(sensor.read_raw(), 700);
        assert_eq!(sensor.read_raw(), 0);
        assert_eq!(sensor.read_raw(), 700);
        assert!(sensor.into_inner().samples.is_empty());
    }
}
