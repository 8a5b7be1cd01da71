use std::{
    rc::Rc,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use consts::hero::WATCHDOG_POLL_INTERVAL;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

use super::{
    scheduler::{Scheduler, SchedulerError},
    teardown::ScopedTeardown,
};

/// The parts of a media element the watchdog drives
pub trait PlaybackTarget {
    fn is_paused(&self) -> bool;

    /// Seek back to the start of the clip
    fn rewind(&self);

    /// Ask the element to play. The outcome is not reported back; a refused
    /// request is simply retried by the next trigger.
    fn request_play(&self);
}

impl<T: PlaybackTarget + ?Sized> PlaybackTarget for Rc<T> {
    fn is_paused(&self) -> bool {
        (**self).is_paused()
    }

    fn rewind(&self) {
        (**self).rewind()
    }

    fn request_play(&self) {
        (**self).request_play()
    }
}

impl PlaybackTarget for HtmlVideoElement {
    fn is_paused(&self) -> bool {
        self.paused()
    }

    fn rewind(&self) {
        self.set_current_time(0.0);
    }

    fn request_play(&self) {
        let promise = match self.play() {
            Ok(promise) => promise,
            Err(e) => {
                log::debug!("video_log: play() threw, retrying on next trigger: {e:?}");
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            // autoplay policy rejections are expected until the user interacts
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("video_log: play() rejected, retrying on next trigger: {e:?}");
            }
        });
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResumeTrigger {
    Poll,
    Visible,
    Ended,
}

/// Keeps the primary clip advancing for as long as it is armed.
///
/// Three triggers feed one [`Watchdog::resume`] path: the poll timer, the
/// document becoming visible, and the clip ending. Each handler returns
/// whether a play request went out.
pub struct Watchdog<T> {
    target: T,
    armed: Arc<AtomicBool>,
}

impl<T: PlaybackTarget> Watchdog<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            armed: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Relaxed)
    }

    pub fn disarm(&self) {
        self.armed.store(false, Ordering::Relaxed);
    }

    /// Disarms from a teardown closure, which must be `Send + Sync`
    pub fn kill_switch(&self) -> impl FnOnce() + Send + Sync + 'static {
        let armed = self.armed.clone();
        move || armed.store(false, Ordering::Relaxed)
    }

    pub fn on_poll(&self) -> bool {
        self.is_armed() && self.target.is_paused() && self.resume(ResumeTrigger::Poll)
    }

    pub fn on_visibility_change(&self, hidden: bool) -> bool {
        !hidden
            && self.is_armed()
            && self.target.is_paused()
            && self.resume(ResumeTrigger::Visible)
    }

    pub fn on_ended(&self) -> bool {
        if !self.is_armed() {
            return false;
        }
        self.target.rewind();
        self.resume(ResumeTrigger::Ended)
    }

    fn resume(&self, trigger: ResumeTrigger) -> bool {
        if !self.is_armed() {
            return false;
        }
        log::trace!("hero watchdog: resuming primary clip ({trigger:?})");
        self.target.request_play();
        true
    }
}

/// Starts the periodic pause check. The returned teardown stops the timer
/// and disarms `watchdog`.
pub fn arm_polling<S, T>(
    scheduler: &S,
    watchdog: Rc<Watchdog<T>>,
) -> Result<ScopedTeardown, SchedulerError>
where
    S: Scheduler,
    T: PlaybackTarget + 'static,
{
    let mut teardown = ScopedTeardown::new();
    teardown.push(watchdog.kill_switch());
    let poller = watchdog.clone();
    let handle = scheduler.every(
        WATCHDOG_POLL_INTERVAL,
        Box::new(move || {
            poller.on_poll();
        }),
    )?;
    teardown.track_timer(handle);
    Ok(teardown)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use web_time::Duration;

    use super::*;
    use crate::playback::test_support::VirtualClock;

    /// Media element stand-in. Play requests succeed unless `blocked`.
    struct FakeVideo {
        clock: VirtualClock,
        paused: Cell<bool>,
        position: Cell<f64>,
        blocked: Cell<bool>,
        play_requests: RefCell<Vec<Duration>>,
    }

    impl FakeVideo {
        fn new(clock: &VirtualClock) -> Rc<Self> {
            Rc::new(Self {
                clock: clock.clone(),
                paused: Cell::new(false),
                position: Cell::new(0.0),
                blocked: Cell::new(false),
                play_requests: RefCell::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<Duration> {
            self.play_requests.borrow().clone()
        }
    }

    impl PlaybackTarget for FakeVideo {
        fn is_paused(&self) -> bool {
            self.paused.get()
        }

        fn rewind(&self) {
            self.position.set(0.0);
        }

        fn request_play(&self) {
            self.play_requests.borrow_mut().push(self.clock.now());
            if !self.blocked.get() {
                self.paused.set(false);
            }
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn armed(clock: &VirtualClock) -> (Rc<FakeVideo>, Rc<Watchdog<Rc<FakeVideo>>>, ScopedTeardown) {
        let video = FakeVideo::new(clock);
        let watchdog = Rc::new(Watchdog::new(video.clone()));
        let teardown = arm_polling(clock, watchdog.clone()).unwrap();
        (video, watchdog, teardown)
    }

    #[test]
    fn playing_clip_is_left_alone() {
        let clock = VirtualClock::new();
        let (video, _watchdog, _teardown) = armed(&clock);
        clock.advance_to(ms(5_000));
        assert!(video.requests().is_empty());
    }

    #[test]
    fn external_pause_is_resumed_within_one_poll() {
        let clock = VirtualClock::new();
        let (video, _watchdog, _teardown) = armed(&clock);

        clock.advance_to(ms(2_300));
        video.paused.set(true);
        clock.advance_to(ms(3_299));

        let requests = video.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0] >= ms(2_300) && requests[0] < ms(3_300));
        assert!(!video.is_paused());
    }

    #[test]
    fn becoming_visible_resumes_without_waiting_for_poll() {
        let clock = VirtualClock::new();
        let (video, watchdog, _teardown) = armed(&clock);

        clock.advance_to(ms(1_500));
        video.paused.set(true);
        assert!(!watchdog.on_visibility_change(true));
        assert!(watchdog.on_visibility_change(false));
        assert_eq!(video.requests(), [ms(1_500)]);
    }

    #[test]
    fn visible_while_playing_does_nothing() {
        let clock = VirtualClock::new();
        let (video, watchdog, _teardown) = armed(&clock);
        assert!(!watchdog.on_visibility_change(false));
        assert!(video.requests().is_empty());
    }

    #[test]
    fn ended_rewinds_and_replays_immediately() {
        let clock = VirtualClock::new();
        let (video, watchdog, _teardown) = armed(&clock);

        clock.advance_to(ms(1_200));
        video.position.set(12.5);
        video.paused.set(true);
        assert!(watchdog.on_ended());

        assert_eq!(video.position.get(), 0.0);
        assert_eq!(video.requests(), [ms(1_200)]);
    }

    #[test]
    fn refused_play_is_retried_every_tick() {
        let clock = VirtualClock::new();
        let (video, _watchdog, _teardown) = armed(&clock);
        video.blocked.set(true);
        video.paused.set(true);

        clock.advance_to(ms(3_000));
        assert_eq!(video.requests(), [ms(1_000), ms(2_000), ms(3_000)]);

        video.blocked.set(false);
        clock.advance_to(ms(6_000));
        assert_eq!(video.requests().len(), 4);
        assert!(!video.is_paused());
    }

    #[test]
    fn teardown_silences_every_trigger() {
        let clock = VirtualClock::new();
        let (video, watchdog, teardown) = armed(&clock);
        assert_eq!(clock.pending(), 1);

        teardown.release();
        assert_eq!(clock.pending(), 0);
        assert!(!watchdog.is_armed());

        video.paused.set(true);
        clock.advance_to(ms(10_000));
        assert!(!watchdog.on_visibility_change(false));
        assert!(!watchdog.on_ended());
        assert!(!watchdog.on_poll());
        assert!(video.requests().is_empty());
    }

    #[test]
    fn polling_teardown_carries_its_own_kill_switch() {
        let clock = VirtualClock::new();
        let (_video, watchdog, teardown) = armed(&clock);
        // poll timer plus disarm, nothing else needed from the host
        assert_eq!(teardown.len(), 2);
        teardown.release();
        assert!(!watchdog.is_armed());
    }

    #[test]
    fn dropping_the_teardown_also_releases() {
        let clock = VirtualClock::new();
        let (video, _watchdog, teardown) = armed(&clock);
        drop(teardown);
        video.paused.set(true);
        clock.advance_to(ms(3_000));
        assert!(video.requests().is_empty());
    }
}
