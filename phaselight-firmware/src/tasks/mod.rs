//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod diag;
pub mod phase;
pub mod sounder;

pub use diag::diag_task;
pub use phase::{phase_task, PhaseTaskConfig};
pub use sounder::{board_sounder, sounder_task};
