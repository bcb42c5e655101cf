//! Edge-triggered phase controller
//!
//! Owns the state carried between ticks (previous reading, latched phase)
//! and the indicator outputs. Each tick runs, in order:
//!
//! 1. read the sensor
//! 2. classify against the previous reading
//! 3. compare with the latched phase
//! 4. drive the indicator if the phase changed
//! 5. store the reading as the new previous reading

use super::classifier::{classify, Delta, Phase, RawReading};
use crate::traits::{ForceSensor, IndicatorDriver};

/// A change of latched phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Phase shown before this tick
    pub from: Phase,
    /// Phase shown from this tick on
    pub to: Phase,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// Tick number, starting at 1
    pub tick: u32,
    /// Reading sampled this tick
    pub reading: RawReading,
    /// Dead-zoned delta, or `None` on the priming tick
    pub delta: Option<Delta>,
    /// Latched phase after this tick
    pub phase: Phase,
    /// Set if the indicator was driven this tick
    pub transition: Option<Transition>,
}

impl TickOutcome {
    /// Check if this tick only primed the previous reading
    pub fn is_priming(&self) -> bool {
        self.delta.is_none()
    }
}

/// Phase controller
///
/// Starts in [`Phase::Idle`] with no previous reading. The first reading
/// only primes the baseline; classification starts with the second.
pub struct PhaseController<I> {
    indicator: I,
    threshold: i32,
    previous: Option<RawReading>,
    latched: Phase,
    ticks: u32,
    transitions: u32,
}

impl<I: IndicatorDriver> PhaseController<I> {
    /// Create a controller whose first reading primes the baseline
    pub fn new(indicator: I, threshold: i32) -> Self {
        Self {
            indicator,
            threshold,
            previous: None,
            latched: Phase::Idle,
            ticks: 0,
            transitions: 0,
        }
    }

    /// Create a controller with a known previous reading
    ///
    /// The first reading is classified against `baseline` (a zero baseline
    /// makes the first tick after boot read as a large rise).
    pub fn with_baseline(indicator: I, threshold: i32, baseline: RawReading) -> Self {
        let mut controller = Self::new(indicator, threshold);
        controller.previous = Some(baseline);
        controller
    }

    /// Sample `sensor` and run one tick
    pub fn tick<S: ForceSensor>(&mut self, sensor: &mut S) -> TickOutcome {
        let reading = sensor.read_raw();
        self.step(reading)
    }

    /// Run one tick with an already sampled reading
    pub fn step(&mut self, reading: RawReading) -> TickOutcome {
        self.ticks = self.ticks.wrapping_add(1);

        let Some(previous) = self.previous else {
            self.previous = Some(reading);
            return TickOutcome {
                tick: self.ticks,
                reading,
                delta: None,
                phase: self.latched,
                transition: None,
            };
        };

        let classification = classify(previous, reading, self.threshold);

        let transition = if classification.phase != self.latched {
            let from = self.latched;
            self.indicator.drive(classification.phase);
            self.latched = classification.phase;
            self.transitions = self.transitions.wrapping_add(1);
            Some(Transition {
                from,
                to: classification.phase,
            })
        } else {
            None
        };

        self.previous = Some(reading);

        TickOutcome {
            tick: self.ticks,
            reading,
            delta: Some(classification.delta),
            phase: self.latched,
            transition,
        }
    }

    /// Phase most recently passed to the indicator
    pub fn latched(&self) -> Phase {
        self.latched
    }

    /// Reading the next tick is classified against
    pub fn previous_reading(&self) -> Option<RawReading> {
        self.previous
    }

    /// Noise threshold in sensor units
    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Number of ticks run
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Number of times the indicator was driven
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    /// Get access to the indicator
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Release the indicator
    pub fn into_indicator(self) -> I {
        self.indicator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Indicator recording every drive call
    #[derive(Default)]
    struct RecordingIndicator {
        driven: Vec<Phase>,
    }

    impl IndicatorDriver for RecordingIndicator {
        fn drive(&mut self, phase: Phase) {
            self.driven.push(phase);
        }
    }

    /// Sensor replaying a fixed sequence
    struct ScriptedSensor<'a> {
        readings: &'a [RawReading],
        next: usize,
    }

    impl ForceSensor for ScriptedSensor<'_> {
        fn read_raw(&mut self) -> RawReading {
            let reading = self.readings[self.next];
            self.next += 1;
            reading
        }
    }

    fn run(readings: &[RawReading], threshold: i32) -> (Vec<TickOutcome>, Vec<Phase>) {
        let mut controller = PhaseController::new(RecordingIndicator::default(), threshold);
        let mut sensor = ScriptedSensor { readings, next: 0 };
        let outcomes: Vec<TickOutcome> = readings
            .iter()
            .map(|_| controller.tick(&mut sensor))
            .collect();
        (outcomes, controller.into_indicator().driven)
    }

    #[test]
    fn test_first_reading_primes() {
        let mut controller = PhaseController::new(RecordingIndicator::default(), 10);
        let outcome = controller.step(500);

        assert!(outcome.is_priming());
        assert_eq!(outcome.phase, Phase::Idle);
        assert_eq!(outcome.transition, None);
        assert_eq!(controller.previous_reading(), Some(500));
        assert!(controller.indicator().driven.is_empty());
    }

    #[test]
    fn test_sustained_ascent_fires_once() {
        let (outcomes, driven) = run(&[500, 520, 540], 10);

        assert_eq!(outcomes[1].delta, Some(20));
        assert_eq!(outcomes[2].delta, Some(20));
        assert_eq!(outcomes[1].phase, Phase::Ascending);
        assert_eq!(outcomes[2].phase, Phase::Ascending);
        assert_eq!(
            outcomes[1].transition,
            Some(Transition {
                from: Phase::Idle,
                to: Phase::Ascending
            })
        );
        assert_eq!(outcomes[2].transition, None);
        assert_eq!(driven, vec![Phase::Ascending]);
    }

    #[test]
    fn test_noise_settles_to_apogee_once() {
        let (outcomes, driven) = run(&[500, 505, 503], 10);

        assert_eq!(outcomes[1].delta, Some(0));
        assert_eq!(outcomes[2].delta, Some(0));
        assert_eq!(outcomes[1].phase, Phase::Apogee);
        assert_eq!(outcomes[2].phase, Phase::Apogee);
        assert!(outcomes[1].transition.is_some());
        assert!(outcomes[2].transition.is_none());
        assert_eq!(driven, vec![Phase::Apogee]);
    }

    #[test]
    fn test_reversal_fires_each_tick() {
        let (outcomes, driven) = run(&[500, 520, 500], 10);

        assert_eq!(outcomes[1].phase, Phase::Ascending);
        assert_eq!(outcomes[2].phase, Phase::Descending);
        assert_eq!(
            outcomes[2].transition,
            Some(Transition {
                from: Phase::Ascending,
                to: Phase::Descending
            })
        );
        assert_eq!(driven, vec![Phase::Ascending, Phase::Descending]);
    }

    #[test]
    fn test_zero_baseline_classifies_first_reading() {
        let mut controller =
            PhaseController::with_baseline(RecordingIndicator::default(), 10, 0);
        let outcome = controller.step(500);

        assert_eq!(outcome.delta, Some(500));
        assert_eq!(outcome.phase, Phase::Ascending);
        assert_eq!(controller.indicator().driven, vec![Phase::Ascending]);
    }

    #[test]
    fn test_previous_reading_updates_without_transition() {
        let mut controller = PhaseController::new(RecordingIndicator::default(), 10);
        controller.step(500);
        controller.step(520);
        let outcome = controller.step(540);

        assert!(outcome.transition.is_none());
        assert_eq!(controller.previous_reading(), Some(540));
        assert_eq!(controller.ticks(), 3);
        assert_eq!(controller.transitions(), 1);
    }

    #[test]
    fn test_full_flight_profile() {
        // Pad, boost, coast to the top, fall, land
        let readings = [
            500, 502, 499, 560, 640, 700, 705, 702, 650, 580, 510, 508, 508,
        ];
        let (_, driven) = run(&readings, 10);

        assert_eq!(
            driven,
            vec![
                Phase::Apogee,
                Phase::Ascending,
                Phase::Apogee,
                Phase::Descending,
                Phase::Apogee,
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_drives_once_per_change(
            readings in proptest::collection::vec(0i32..4096, 1..64),
            threshold in 0i32..64,
        ) {
            let (outcomes, driven) = run(&readings, threshold);

            // Expected drives: every tick whose phase differs from the one before
            let mut expected = Vec::new();
            let mut latched = Phase::Idle;
            for pair in readings.windows(2) {
                let phase = classify(pair[0], pair[1], threshold).phase;
                if phase != latched {
                    expected.push(phase);
                    latched = phase;
                }
            }

            prop_assert_eq!(&driven, &expected);

            let fired = outcomes.iter().filter(|o| o.transition.is_some()).count();
            prop_assert_eq!(fired, driven.len());

            // Never drives the same phase twice in a row
            for pair in driven.windows(2) {
                prop_assert_ne!(pair[0], pair[1]);
            }
        }
    }
}
