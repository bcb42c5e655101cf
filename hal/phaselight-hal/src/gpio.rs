//! GPIO pin abstractions
//!
//! Provides the digital output trait used by the indicator lamps, plus an
//! adapter for any `embedded-hal` 1.0 output pin that cannot fail.

use core::convert::Infallible;

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Adapter from an `embedded-hal` output pin to [`OutputPin`]
///
/// The driven level is tracked here, so the wrapped pin only needs the
/// write half of the `embedded-hal` API. Pins whose error type is not
/// `Infallible` are rejected at compile time.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P> EhOutput<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    /// Wrap a pin, driving it low
    pub fn new(pin: P) -> Self {
        let mut out = Self { pin, high: true };
        out.set_low();
        out
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for EhOutput<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(never) => match never {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    /// Mock embedded-hal pin counting writes
    struct MockEhPin {
        level: bool,
        writes: u32,
    }

    impl ErrorType for MockEhPin {
        type Error = Infallible;
    }

    impl embedded_hal::digital::OutputPin for MockEhPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.level = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.level = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_new_drives_low() {
        let out = EhOutput::new(MockEhPin {
            level: true,
            writes: 0,
        });

        assert!(out.is_set_low());
        let pin = out.into_inner();
        assert!(!pin.level);
        assert_eq!(pin.writes, 1);
    }

    #[test]
    fn test_set_state_tracks_level() {
        let mut out = EhOutput::new(MockEhPin {
            level: false,
            writes: 0,
        });

        out.set_state(true);
        assert!(out.is_set_high());

        out.set_state(false);
        assert!(out.is_set_low());
        assert!(!out.into_inner().level);
    }
}
