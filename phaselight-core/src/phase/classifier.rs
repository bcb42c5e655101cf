//! Delta classifier
//!
//! Maps the change between two force readings to a flight phase. Changes
//! smaller than the noise threshold are treated as no change at all.

/// Raw sensor sample in the converter's native units
pub type RawReading = i32;

/// Difference between two consecutive readings
pub type Delta = i32;

/// Flight phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Power-on state, nothing classified yet
    #[default]
    Idle,
    /// Force increasing
    Ascending,
    /// Force flat or within the noise band
    ///
    /// Resting on the pad reads the same as the top of the flight.
    Apogee,
    /// Force decreasing
    Descending,
}

impl Phase {
    /// Phase implied by a (dead-zoned) delta
    pub fn from_delta(delta: Delta) -> Self {
        if delta > 0 {
            Phase::Ascending
        } else if delta < 0 {
            Phase::Descending
        } else {
            Phase::Apogee
        }
    }

    /// Check if entering this phase sounds the buzzer
    pub fn sounds(&self) -> bool {
        matches!(self, Phase::Apogee)
    }

    /// Lowercase name used in diagnostic output
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Ascending => "ascending",
            Phase::Apogee => "apogee",
            Phase::Descending => "descending",
        }
    }
}

/// Result of classifying one pair of readings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Classification {
    /// Inferred phase
    pub phase: Phase,
    /// Delta after the dead zone was applied (zero inside the noise band)
    pub delta: Delta,
}

/// Classify the change from `previous` to `current`
///
/// `delta = current - previous`, saturating at the `i32` limits. If
/// `|delta| < threshold` the delta is forced to zero. A zero delta is
/// [`Phase::Apogee`]. A threshold of zero or below disables the dead zone.
pub fn classify(previous: RawReading, current: RawReading, threshold: i32) -> Classification {
    let mut delta = current.saturating_sub(previous);

    if threshold > 0 && delta.unsigned_abs() < threshold as u32 {
        delta = 0;
    }

    Classification {
        phase: Phase::from_delta(delta),
        delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rising_reading_ascends() {
        let c = classify(500, 520, 10);
        assert_eq!(c.phase, Phase::Ascending);
        assert_eq!(c.delta, 20);
    }

    #[test]
    fn test_falling_reading_descends() {
        let c = classify(520, 500, 10);
        assert_eq!(c.phase, Phase::Descending);
        assert_eq!(c.delta, -20);
    }

    #[test]
    fn test_jitter_is_zeroed() {
        let c = classify(500, 505, 10);
        assert_eq!(c.phase, Phase::Apogee);
        assert_eq!(c.delta, 0);

        let c = classify(505, 503, 10);
        assert_eq!(c.phase, Phase::Apogee);
        assert_eq!(c.delta, 0);
    }

    #[test]
    fn test_threshold_boundary() {
        // Exactly at the threshold is motion, one below is noise
        assert_eq!(classify(500, 510, 10).phase, Phase::Ascending);
        assert_eq!(classify(500, 509, 10).phase, Phase::Apogee);
        assert_eq!(classify(510, 500, 10).phase, Phase::Descending);
        assert_eq!(classify(509, 500, 10).phase, Phase::Apogee);
    }

    #[test]
    fn test_flat_signal_is_apogee() {
        // No dead zone at all: only an exactly flat signal is apogee
        assert_eq!(classify(512, 512, 0).phase, Phase::Apogee);
        assert_eq!(classify(512, 513, 0).phase, Phase::Ascending);
    }

    #[test]
    fn test_negative_threshold_disables_dead_zone() {
        let c = classify(500, 501, -5);
        assert_eq!(c.phase, Phase::Ascending);
        assert_eq!(c.delta, 1);
    }

    #[test]
    fn test_extremes_saturate() {
        let c = classify(i32::MIN, i32::MAX, 10);
        assert_eq!(c.phase, Phase::Ascending);
        assert_eq!(c.delta, i32::MAX);

        let c = classify(i32::MAX, i32::MIN, i32::MAX);
        assert_eq!(c.phase, Phase::Descending);
        assert_eq!(c.delta, i32::MIN);
    }

    #[test]
    fn test_phase_sounds_only_at_apogee() {
        assert!(Phase::Apogee.sounds());
        assert!(!Phase::Idle.sounds());
        assert!(!Phase::Ascending.sounds());
        assert!(!Phase::Descending.sounds());
    }

    proptest! {
        #[test]
        fn prop_noise_band_is_apogee(prev in -1_000_000i32..1_000_000, t in 1i32..1000, raw: i32) {
            let offset = raw % t;
            prop_assert_eq!(classify(prev, prev + offset, t).phase, Phase::Apogee);
        }

        #[test]
        fn prop_rise_at_threshold_ascends(prev in -1_000_000i32..1_000_000, t in 1i32..100_000, extra in 0i32..100_000) {
            prop_assert_eq!(classify(prev, prev + t + extra, t).phase, Phase::Ascending);
        }

        #[test]
        fn prop_fall_at_threshold_descends(prev in -1_000_000i32..1_000_000, t in 1i32..100_000, extra in 0i32..100_000) {
            prop_assert_eq!(classify(prev, prev - t - extra, t).phase, Phase::Descending);
        }

        #[test]
        fn prop_delta_sign_matches_phase(prev: i32, cur: i32, t: i32) {
            let c = classify(prev, cur, t);
            prop_assert_eq!(c.phase, Phase::from_delta(c.delta));
            prop_assert_ne!(c.phase, Phase::Idle);
        }
    }
}
