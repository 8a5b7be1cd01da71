//! Deterministic clock standing in for the browser timers.

use std::{
    cell::RefCell,
    collections::HashSet,
    rc::Rc,
    sync::{Arc, Mutex},
};

use web_time::Duration;

use super::scheduler::{Scheduler, SchedulerError, TimerHandle};

enum Job {
    Every(Duration, Rc<dyn Fn()>),
    After(Box<dyn FnOnce()>),
}

struct Timer {
    id: u64,
    due: Duration,
    job: Job,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer>,
}

#[derive(Clone, Default)]
pub struct VirtualClock {
    state: Rc<RefCell<ClockState>>,
    cancelled: Arc<Mutex<HashSet<u64>>>,
}

pub struct VirtualTimer {
    id: u64,
    cancelled: Arc<Mutex<HashSet<u64>>>,
}

impl TimerHandle for VirtualTimer {
    fn cancel(&self) {
        self.cancelled.lock().unwrap().insert(self.id);
    }
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    fn is_cancelled(&self, id: u64) -> bool {
        self.cancelled.lock().unwrap().contains(&id)
    }

    fn purge(&self) {
        let cancelled = self.cancelled.lock().unwrap();
        self.state
            .borrow_mut()
            .timers
            .retain(|t| !cancelled.contains(&t.id));
    }

    /// Timers still registered and not cancelled
    pub fn pending(&self) -> usize {
        self.purge();
        self.state.borrow().timers.len()
    }

    /// Runs every timer due up to `target`, in due order
    pub fn advance_to(&self, target: Duration) {
        loop {
            self.purge();
            let timer = {
                let mut state = self.state.borrow_mut();
                let next = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i);
                let Some(pos) = next else {
                    break;
                };
                let timer = state.timers.remove(pos);
                state.now = timer.due;
                timer
            };
            match timer.job {
                Job::Every(period, tick) => {
                    tick();
                    if !self.is_cancelled(timer.id) {
                        self.state.borrow_mut().timers.push(Timer {
                            id: timer.id,
                            due: timer.due + period,
                            job: Job::Every(period, tick),
                        });
                    }
                }
                Job::After(fire) => fire(),
            }
        }
        self.state.borrow_mut().now = target;
    }

    fn schedule(&self, delay: Duration, job: Job) -> VirtualTimer {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.timers.push(Timer { id, due, job });
        VirtualTimer {
            id,
            cancelled: self.cancelled.clone(),
        }
    }
}

impl Scheduler for VirtualClock {
    type Handle = VirtualTimer;

    fn every(
        &self,
        period: Duration,
        tick: Box<dyn Fn()>,
    ) -> Result<VirtualTimer, SchedulerError> {
        Ok(self.schedule(period, Job::Every(period, Rc::from(tick))))
    }

    fn after(
        &self,
        delay: Duration,
        fire: Box<dyn FnOnce()>,
    ) -> Result<VirtualTimer, SchedulerError> {
        Ok(self.schedule(delay, Job::After(fire)))
    }
}
