//! Sounder task
//!
//! Plays apogee pulses on the PWM beeper. The phase indicator never waits
//! for a pulse: it posts a command on `SOUNDER_CMD` and the tick carries on.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Timer;
use phaselight_drivers::sounder::{PulseSounder, SignalSounder, SounderWait};
use phaselight_hal_rp2040::pwm::PwmBeeper;

use crate::channels::SOUNDER_CMD;

/// Tone output posting to the sounder task
pub type BoardSounder = SignalSounder<'static, CriticalSectionRawMutex>;

/// Tone output wired to [`sounder_task`]
pub fn board_sounder() -> BoardSounder {
    SignalSounder::new(&SOUNDER_CMD)
}

/// Sounder task - plays one tone at a time
#[embassy_executor::task]
pub async fn sounder_task(beeper: PwmBeeper<'static>) {
    info!("Sounder task started");

    let mut sounder = PulseSounder::new(beeper);
    let mut wait = SounderWait::Command;
    let mut refused = 0;

    loop {
        wait = match wait {
            SounderWait::Command => sounder.handle(SOUNDER_CMD.wait().await),
            SounderWait::CommandOrTimeout { duration_ms } => {
                match select(Timer::after_millis(duration_ms as u64), SOUNDER_CMD.wait()).await {
                    Either::First(()) => sounder.elapsed(),
                    Either::Second(command) => sounder.handle(command),
                }
            }
        };

        if sounder.refused() != refused {
            refused = sounder.refused();
            warn!("Beeper cannot produce the requested tone");
        } else if let SounderWait::CommandOrTimeout { duration_ms } = wait {
            debug!("Tone for {} ms", duration_ms);
        }
    }
}
