//! PWM tone generation
//!
//! Drives a piezo sounder with a 50% square wave from one PWM slice.
//! Timing of the tone (when to stop) is the caller's job; see the
//! firmware sounder task.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::FixedU16;
use phaselight_hal::{Beeper, PwmTone};

/// Which output of the slice the sounder is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SliceOutput {
    /// Channel A (even GPIO)
    A,
    /// Channel B (odd GPIO)
    B,
}

/// Square-wave beeper on a PWM slice
pub struct PwmBeeper<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
    output: SliceOutput,
    sounding: bool,
}

impl<'d> PwmBeeper<'d> {
    /// Create a new beeper, initially silent
    pub fn new(pwm: Pwm<'d>, output: SliceOutput) -> Self {
        let mut beeper = Self {
            pwm,
            config: PwmConfig::default(),
            output,
            sounding: true,
        };
        beeper.stop();
        beeper
    }

    fn set_compare(&mut self, compare: u16) {
        match self.output {
            SliceOutput::A => self.config.compare_a = compare,
            SliceOutput::B => self.config.compare_b = compare,
        }
    }
}

impl Beeper for PwmBeeper<'_> {
    /// Start a continuous tone at `frequency_hz`
    ///
    /// Stays silent if the frequency cannot be produced from the current
    /// system clock.
    fn start(&mut self, frequency_hz: u32) -> bool {
        let Some(tone) = PwmTone::for_frequency(clk_sys_freq(), frequency_hz) else {
            self.stop();
            return false;
        };

        self.config.divider = FixedU16::from_num(tone.divider);
        self.config.top = tone.top;
        self.set_compare(tone.compare);
        self.config.enable = true;
        self.pwm.set_config(&self.config);
        self.sounding = true;
        true
    }

    /// Silence the sounder, leaving the pin low
    fn stop(&mut self) {
        self.set_compare(0);
        self.config.enable = false;
        self.pwm.set_config(&self.config);
        self.sounding = false;
    }

    /// Check if a tone is playing
    fn is_sounding(&self) -> bool {
        self.sounding
    }
}
