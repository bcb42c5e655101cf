//! Tone output abstraction
//!
//! The sounder is fire-and-forget: callers request a tone of a given
//! frequency and duration and return immediately. The implementation is
//! responsible for ending the tone when the duration elapses.

/// Timed tone generator (piezo buzzer, speaker)
pub trait ToneOutput {
    /// Start a tone that stops on its own after `duration_ms`
    fn tone(&mut self, frequency_hz: u32, duration_ms: u32);

    /// Stop any tone in progress
    fn silence(&mut self);
}

/// Continuous tone generator with no timing of its own
///
/// Something else decides when to stop; see `ToneOutput` for timed tones.
pub trait Beeper {
    /// Start a continuous tone
    ///
    /// Returns `false` and stays silent if the frequency cannot be produced.
    fn start(&mut self, frequency_hz: u32) -> bool;

    /// Stop the tone
    fn stop(&mut self);

    /// Check if a tone is playing
    fn is_sounding(&self) -> bool;
}

/// Maximum integer clock divider of a PWM slice
const MAX_DIVIDER: u32 = 255;

/// Number of counter steps available per PWM period (16-bit counter)
const COUNTER_STEPS: u32 = 1 << 16;

/// PWM settings producing a square wave at a requested frequency
///
/// Frequency = clk / (divider × (top + 1)). The divider is the smallest
/// integer that lets the period fit the 16-bit counter, which keeps the
/// frequency error lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmTone {
    /// Integer clock divider (1-255)
    pub divider: u8,
    /// Counter wrap value
    pub top: u16,
    /// Compare value for a 50% duty cycle
    pub compare: u16,
}

impl PwmTone {
    /// Compute PWM settings for `frequency_hz` from a `clk_hz` input clock
    ///
    /// Returns `None` if the frequency is zero, above half the clock, or too
    /// low to reach with the maximum divider.
    pub fn for_frequency(clk_hz: u32, frequency_hz: u32) -> Option<Self> {
        if frequency_hz == 0 {
            return None;
        }

        let cycles = clk_hz / frequency_hz;
        if cycles < 2 {
            return None;
        }

        let divider = cycles.div_ceil(COUNTER_STEPS).max(1);
        if divider > MAX_DIVIDER {
            return None;
        }

        let period = cycles / divider;

        Some(Self {
            divider: divider as u8,
            top: (period - 1) as u16,
            compare: (period / 2) as u16,
        })
    }
}
