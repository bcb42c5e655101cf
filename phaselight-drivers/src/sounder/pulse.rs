//! Timed pulses on a continuous beeper
//!
//! The timing itself belongs to the caller (an async task racing a timer
//! against the next command). This type only decides what the beeper does
//! and what to wait for next.

use phaselight_hal::Beeper;

/// Sounder request from the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SounderCommand {
    /// Play a tone, then fall silent after `duration_ms`
    Tone { frequency_hz: u32, duration_ms: u32 },
    /// Stop any tone in progress
    Silence,
}

/// What the caller waits for after handing over a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SounderWait {
    /// Silent; wait for the next command
    Command,
    /// Sounding; wait for the next command or `duration_ms`, whichever
    /// comes first, and call [`PulseSounder::elapsed`] on timeout
    CommandOrTimeout { duration_ms: u32 },
}

/// Pulse sounder
///
/// A newer command always replaces the current one, so a tone in progress
/// is pre-empted by either a new tone or a silence.
pub struct PulseSounder<B> {
    beeper: B,
    /// Tones the beeper could not produce
    refused: u32,
}

impl<B: Beeper> PulseSounder<B> {
    /// Create a new pulse sounder, silencing the beeper
    pub fn new(mut beeper: B) -> Self {
        if beeper.is_sounding() {
            beeper.stop();
        }
        Self { beeper, refused: 0 }
    }

    /// Act on `command`
    pub fn handle(&mut self, command: SounderCommand) -> SounderWait {
        match command {
            SounderCommand::Silence => {
                self.silence();
                SounderWait::Command
            }
            SounderCommand::Tone {
                frequency_hz,
                duration_ms,
            } => {
                if duration_ms == 0 {
                    self.silence();
                    return SounderWait::Command;
                }

                if self.beeper.start(frequency_hz) {
                    SounderWait::CommandOrTimeout { duration_ms }
                } else {
                    // Unproducible tone reads as silence
                    self.refused = self.refused.wrapping_add(1);
                    self.silence();
                    SounderWait::Command
                }
            }
        }
    }

    /// The current tone ran its full duration
    pub fn elapsed(&mut self) -> SounderWait {
        self.handle(SounderCommand::Silence)
    }

    /// Number of tones the beeper refused
    pub fn refused(&self) -> u32 {
        self.refused
    }

    /// Get access to the beeper
    pub fn beeper(&self) -> &B {
        &self.beeper
    }

    fn silence(&mut self) {
        if self.beeper.is_sounding() {
            self.beeper.stop();
        }
    }
}
