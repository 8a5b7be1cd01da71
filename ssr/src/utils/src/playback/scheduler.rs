use leptos::prelude::{
    set_interval_with_handle, set_timeout_with_handle, IntervalHandle, TimeoutHandle,
};
use thiserror::Error;
use web_time::Duration;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("couldn't register timer: {0}")]
    Register(String),
}

pub trait TimerHandle: Send + Sync + 'static {
    fn cancel(&self);
}

/// Host timer facility. Callbacks run on the single UI thread.
pub trait Scheduler {
    type Handle: TimerHandle;

    fn every(
        &self,
        period: Duration,
        tick: Box<dyn Fn()>,
    ) -> Result<Self::Handle, SchedulerError>;

    fn after(
        &self,
        delay: Duration,
        fire: Box<dyn FnOnce()>,
    ) -> Result<Self::Handle, SchedulerError>;
}

/// `setInterval` / `setTimeout` on the browser window
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[derive(Clone, Copy, Debug)]
pub enum BrowserTimer {
    Interval(IntervalHandle),
    Timeout(TimeoutHandle),
}

impl TimerHandle for BrowserTimer {
    fn cancel(&self) {
        match self {
            BrowserTimer::Interval(handle) => handle.clear(),
            BrowserTimer::Timeout(handle) => handle.clear(),
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn every(
        &self,
        period: Duration,
        tick: Box<dyn Fn()>,
    ) -> Result<BrowserTimer, SchedulerError> {
        set_interval_with_handle(tick, period)
            .map(BrowserTimer::Interval)
            .map_err(|e| SchedulerError::Register(format!("{e:?}")))
    }

    fn after(
        &self,
        delay: Duration,
        fire: Box<dyn FnOnce()>,
    ) -> Result<BrowserTimer, SchedulerError> {
        set_timeout_with_handle(fire, delay)
            .map(BrowserTimer::Timeout)
            .map_err(|e| SchedulerError::Register(format!("{e:?}")))
    }
}
