use consts::hero::LOAD_SETTLE_DELAY;
use web_time::Duration;

use super::{
    scheduler::{Scheduler, SchedulerError},
    teardown::ScopedTeardown,
};

/// `HTMLMediaElement.HAVE_CURRENT_DATA`
pub const HAVE_CURRENT_DATA: u16 = 2;

/// True once a media element's `readyState` means `loadeddata` already fired
pub fn already_playable(ready_state: u16) -> bool {
    ready_state >= HAVE_CURRENT_DATA
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackState {
    pub is_loading: bool,
    pub loaded_count: u32,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_loading: true,
            loaded_count: 0,
        }
    }
}

/// Video elements that report readiness to the gate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoSlot {
    Primary,
    Preview,
}

/// What the host should do after a ready signal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateStep {
    /// Still loading: (re)start the settle timer with this delay
    ScheduleOpen(Duration),
    /// Counted after the gate opened, nothing to schedule
    Counted,
    /// This element was already counted
    AlreadyCounted,
}

/// Turns "video ready" signals into the one-way spinner transition.
/// Every signal while loading restarts the settle delay, so the gate opens
/// `LOAD_SETTLE_DELAY` after the last element that became ready in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadGate {
    state: PlaybackState,
    primary_counted: bool,
    preview_counted: bool,
}

impl LoadGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn loaded_count(&self) -> u32 {
        self.state.loaded_count
    }

    pub fn notify_loaded(&mut self, slot: VideoSlot) -> GateStep {
        let counted = match slot {
            VideoSlot::Primary => &mut self.primary_counted,
            VideoSlot::Preview => &mut self.preview_counted,
        };
        if *counted {
            return GateStep::AlreadyCounted;
        }
        *counted = true;
        self.state.loaded_count += 1;

        if !self.state.is_loading {
            return GateStep::Counted;
        }
        log::debug!("hero: {slot:?} clip ready, settling for {LOAD_SETTLE_DELAY:?}");
        GateStep::ScheduleOpen(LOAD_SETTLE_DELAY)
    }

    /// Clears the loading flag. Returns false if it was already clear.
    pub fn open(&mut self) -> bool {
        if !self.state.is_loading {
            return false;
        }
        self.state.is_loading = false;
        log::debug!("hero: load gate open after {} ready signal(s)", self.state.loaded_count);
        true
    }
}

/// Acts on a [`GateStep`]: a pending open in `pending` is cancelled and a
/// fresh one is scheduled, so only the latest settle timer can fire.
pub fn admit_ready<S: Scheduler>(
    scheduler: &S,
    step: GateStep,
    pending: &mut ScopedTeardown,
    open: impl FnOnce() + 'static,
) -> Result<(), SchedulerError> {
    let GateStep::ScheduleOpen(delay) = step else {
        return Ok(());
    };
    pending.release_all();
    let handle = scheduler.after(delay, Box::new(open))?;
    pending.track_timer(handle);
    Ok(())
}
