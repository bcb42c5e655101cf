//! Three-lamp phase indicator
//!
//! One lamp per flight phase plus a sounder pulsed on entering apogee.
//! Every drive clears all outputs before setting the new ones.

use phaselight_core::config::SounderConfig;
use phaselight_core::phase::Phase;
use phaselight_core::traits::{IndicatorDriver, IndicatorLamp};
use phaselight_hal::ToneOutput;

/// The three phase lamps
pub struct PhaseLamps<L> {
    pub ascend: L,
    pub apogee: L,
    pub descend: L,
}

/// Snapshot of which lamps are lit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LampState {
    pub ascend: bool,
    pub apogee: bool,
    pub descend: bool,
}

impl LampState {
    /// Number of lamps lit
    pub fn lit_count(&self) -> u8 {
        self.ascend as u8 + self.apogee as u8 + self.descend as u8
    }
}

/// Phase indicator
///
/// | Phase        | Output                          |
/// |--------------|---------------------------------|
/// | `Idle`       | all dark, silent                |
/// | `Ascending`  | ascend lamp                     |
/// | `Apogee`     | apogee lamp + one sounder pulse |
/// | `Descending` | descend lamp                    |
pub struct PhaseIndicator<L, S> {
    lamps: PhaseLamps<L>,
    sounder: S,
    tone: SounderConfig,
    /// Apogee pulses requested since creation
    pulses: u32,
}

impl<L: IndicatorLamp, S: ToneOutput> PhaseIndicator<L, S> {
    /// Create a new indicator with every output off
    pub fn new(lamps: PhaseLamps<L>, sounder: S, tone: SounderConfig) -> Self {
        let mut indicator = Self {
            lamps,
            sounder,
            tone,
            pulses: 0,
        };
        indicator.clear();
        indicator
    }

    /// Turn every lamp off and silence the sounder
    pub fn clear(&mut self) {
        self.lamps.ascend.set_lit(false);
        self.lamps.apogee.set_lit(false);
        self.lamps.descend.set_lit(false);
        self.sounder.silence();
    }

    /// Which lamps are currently lit
    pub fn lamp_state(&self) -> LampState {
        LampState {
            ascend: self.lamps.ascend.is_lit(),
            apogee: self.lamps.apogee.is_lit(),
            descend: self.lamps.descend.is_lit(),
        }
    }

    /// Number of apogee pulses requested
    pub fn pulses(&self) -> u32 {
        self.pulses
    }

    /// Get access to the sounder
    pub fn sounder(&self) -> &S {
        &self.sounder
    }
}

impl<L: IndicatorLamp, S: ToneOutput> IndicatorDriver for PhaseIndicator<L, S> {
    fn drive(&mut self, phase: Phase) {
        self.clear();

        match phase {
            Phase::Idle => {}
            Phase::Ascending => self.lamps.ascend.set_lit(true),
            Phase::Apogee => {
                self.lamps.apogee.set_lit(true);
                self.sounder.tone(self.tone.frequency_hz, self.tone.duration_ms);
                self.pulses = self.pulses.wrapping_add(1);
            }
            Phase::Descending => self.lamps.descend.set_lit(true),
        }
    }
}
