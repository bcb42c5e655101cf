//! Analog input abstraction

/// Errors reported by an ADC conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete
    ConversionError,
}

/// ADC reading trait for platform abstraction
///
/// One implementor owns exactly one channel. Values are returned in the
/// converter's native range (0-4095 on a 12-bit ADC).
pub trait AdcReader {
    /// Read the channel once
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read(&mut self) -> Result<u16, AdcError>;
}
