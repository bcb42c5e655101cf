//! Phase task
//!
//! Runs the control loop: one sensor read, classification and (on a phase
//! change) indicator update per tick.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};
use phaselight_core::diag::should_report;
use phaselight_core::phase::PhaseController;
use phaselight_drivers::indicator::{GpioLamp, PhaseIndicator};
use phaselight_drivers::sensor::AnalogForceSensor;
use phaselight_hal::EhOutput;
use phaselight_hal_rp2040::adc::BlockingAdcInput;

use super::sounder::BoardSounder;
use crate::channels::{DIAG_CHANNEL, TRANSITIONS};

/// Indicator as wired on the board
pub type BoardIndicator = PhaseIndicator<GpioLamp<EhOutput<Output<'static>>>, BoardSounder>;

/// Force sensor as wired on the board
pub type BoardSensor = AnalogForceSensor<BlockingAdcInput<'static>>;

/// Phase task settings
#[derive(Debug, Clone, Copy)]
pub struct PhaseTaskConfig {
    /// Time between ticks
    pub tick_period_ms: u32,
    /// Forward outcomes to the diagnostic task
    pub diagnostics: bool,
    /// Forward every tick, not only transitions
    pub verbose: bool,
}

/// Phase task - samples the sensor every tick and drives the indicator
#[embassy_executor::task]
pub async fn phase_task(
    mut sensor: BoardSensor,
    mut controller: PhaseController<BoardIndicator>,
    config: PhaseTaskConfig,
) {
    info!(
        "Phase task started (tick {} ms, threshold {})",
        config.tick_period_ms,
        controller.threshold()
    );

    let mut ticker = Ticker::every(Duration::from_millis(config.tick_period_ms as u64));

    loop {
        ticker.next().await;

        let outcome = controller.tick(&mut sensor);

        if let Some(transition) = outcome.transition {
            info!(
                "Tick {}: {} -> {} (raw {}, delta {})",
                outcome.tick,
                transition.from,
                transition.to,
                outcome.reading,
                outcome.delta
            );
            TRANSITIONS.store(controller.transitions(), Ordering::Relaxed);
        } else {
            trace!("Tick {}: raw {} delta {}", outcome.tick, outcome.reading, outcome.delta);
        }

        if config.diagnostics
            && should_report(&outcome, config.verbose)
            && DIAG_CHANNEL.try_send(outcome).is_err()
        {
            warn!("Diagnostic queue full, dropped tick {}", outcome.tick);
        }
    }
}
