//! Fire-and-forget tone output over an embassy `Signal`
//!
//! The signal holds only the latest command. A `Silence` immediately
//! followed by a `Tone` (what every apogee drive posts) reaches the
//! receiver as the `Tone` alone.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use phaselight_hal::ToneOutput;

use super::pulse::SounderCommand;

/// Tone output that posts commands for a sounder task
pub struct SignalSounder<'a, M: RawMutex> {
    signal: &'a Signal<M, SounderCommand>,
}

impl<'a, M: RawMutex> SignalSounder<'a, M> {
    /// Post commands to `signal`
    pub fn new(signal: &'a Signal<M, SounderCommand>) -> Self {
        Self { signal }
    }
}

impl<M: RawMutex> ToneOutput for SignalSounder<'_, M> {
    fn tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        self.signal.signal(SounderCommand::Tone {
            frequency_hz,
            duration_ms,
        });
    }

    fn silence(&mut self) {
        self.signal.signal(SounderCommand::Silence);
    }
}
