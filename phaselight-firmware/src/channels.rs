//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! The phase task is the only producer on each of them.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicU32;

use phaselight_core::phase::TickOutcome;
use phaselight_drivers::sounder::SounderCommand;

/// Channel capacity for tick outcomes awaiting diagnostic output
const DIAG_CHANNEL_SIZE: usize = 8;

/// Sounder command signal (updated by the phase indicator)
///
/// Only the latest command is kept; a newer one pre-empts a tone in progress.
pub static SOUNDER_CMD: Signal<CriticalSectionRawMutex, SounderCommand> = Signal::new();

/// Tick outcomes for the diagnostic UART
pub static DIAG_CHANNEL: Channel<CriticalSectionRawMutex, TickOutcome, DIAG_CHANNEL_SIZE> =
    Channel::new();

/// Phase transitions since boot (read by the heartbeat)
pub static TRANSITIONS: AtomicU32 = AtomicU32::new(0);
