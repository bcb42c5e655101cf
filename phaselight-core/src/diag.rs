//! Diagnostic text lines
//!
//! Renders tick outcomes as single CRLF-terminated ASCII lines for the
//! serial diagnostic output, e.g.:
//!
//! ```text
//! tick=1 raw=500 primed
//! tick=2 raw=520 delta=20 phase=ascending from=idle
//! tick=3 raw=540 delta=20 phase=ascending
//! ```

use core::fmt::{self, Write};

use heapless::String;

use crate::phase::TickOutcome;

/// Longest line that can be rendered
pub const MAX_LINE_LEN: usize = 96;

/// One rendered diagnostic line
pub type DiagLine = String<MAX_LINE_LEN>;

/// Check if `outcome` goes to the diagnostic output
///
/// Priming and transition ticks are always reported. Ticks that only
/// sustain the latched phase are reported when `verbose` is set.
pub fn should_report(outcome: &TickOutcome, verbose: bool) -> bool {
    verbose || outcome.transition.is_some() || outcome.is_priming()
}

/// Render `outcome` as a diagnostic line
pub fn render(outcome: &TickOutcome) -> Result<DiagLine, fmt::Error> {
    let mut line = DiagLine::new();

    write!(line, "tick={} raw={}", outcome.tick, outcome.reading)?;

    match outcome.delta {
        None => line.push_str(" primed").map_err(|_| fmt::Error)?,
        Some(delta) => {
            write!(line, " delta={} phase={}", delta, outcome.phase.as_str())?;
            if let Some(transition) = outcome.transition {
                write!(line, " from={}", transition.from.as_str())?;
            }
        }
    }

    line.push_str("\r\n").map_err(|_| fmt::Error)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::{Phase, PhaseController, Transition};
    use crate::traits::IndicatorDriver;

    /// Indicator with no outputs
    struct NullIndicator;

    impl IndicatorDriver for NullIndicator {
        fn drive(&mut self, _phase: Phase) {}
    }

    #[test]
    fn test_priming_line() {
        let outcome = TickOutcome {
            tick: 1,
            reading: 500,
            delta: None,
            phase: Phase::Idle,
            transition: None,
        };

        assert_eq!(render(&outcome).unwrap().as_str(), "tick=1 raw=500 primed\r\n");
    }

    #[test]
    fn test_transition_line() {
        let outcome = TickOutcome {
            tick: 2,
            reading: 520,
            delta: Some(20),
            phase: Phase::Ascending,
            transition: Some(Transition {
                from: Phase::Idle,
                to: Phase::Ascending,
            }),
        };

        assert_eq!(
            render(&outcome).unwrap().as_str(),
            "tick=2 raw=520 delta=20 phase=ascending from=idle\r\n"
        );
    }

    #[test]
    fn test_sustained_line() {
        let outcome = TickOutcome {
            tick: 3,
            reading: 503,
            delta: Some(0),
            phase: Phase::Apogee,
            transition: None,
        };

        assert_eq!(
            render(&outcome).unwrap().as_str(),
            "tick=3 raw=503 delta=0 phase=apogee\r\n"
        );
    }

    #[test]
    fn test_quiet_reporting_skips_sustained_ticks() {
        let mut controller = PhaseController::new(NullIndicator, 10);
        let reported: Vec<u32> = [500, 520, 540, 560, 540]
            .iter()
            .map(|&reading| controller.step(reading))
            .filter(|outcome| should_report(outcome, false))
            .map(|outcome| outcome.tick)
            .collect();

        // Priming, rise, fall
        assert_eq!(reported, vec![1, 2, 5]);
    }

    #[test]
    fn test_verbose_reporting_sends_every_tick() {
        let mut controller = PhaseController::new(NullIndicator, 10);
        let reported = [500, 520, 540, 560, 540]
            .iter()
            .map(|&reading| controller.step(reading))
            .filter(|outcome| should_report(outcome, true))
            .count();

        assert_eq!(reported, 5);
    }

    #[test]
    fn test_widest_line_fits() {
        let outcome = TickOutcome {
            tick: u32::MAX,
            reading: i32::MIN,
            delta: Some(i32::MIN),
            phase: Phase::Descending,
            transition: Some(Transition {
                from: Phase::Descending,
                to: Phase::Descending,
            }),
        };

        assert!(render(&outcome).is_ok());
    }
}
