//! Hero playback continuity: the load gate that hides the first-paint
//! spinner and the watchdog that keeps the primary clip advancing.

pub mod load_gate;
pub mod scheduler;
pub mod teardown;
pub mod watchdog;

#[cfg(test)]
pub(crate) mod test_support;

pub use load_gate::{
    admit_ready, already_playable, GateStep, LoadGate, PlaybackState, VideoSlot,
};
pub use scheduler::{BrowserScheduler, Scheduler, SchedulerError, TimerHandle};
pub use teardown::ScopedTeardown;
pub use watchdog::{arm_polling, PlaybackTarget, ResumeTrigger, Watchdog};
