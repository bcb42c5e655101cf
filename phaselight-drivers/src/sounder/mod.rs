//! Sounder implementations
//!
//! The indicator posts [`SounderCommand`]s through a [`SignalSounder`];
//! a [`PulseSounder`] on the receiving side turns them into beeper
//! start/stop calls and tells its caller how long to wait.

pub mod pulse;
pub mod signal;

pub use pulse::{PulseSounder, SounderCommand, SounderWait};
pub use signal::SignalSounder;
