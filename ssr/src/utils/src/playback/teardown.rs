use std::fmt;

use super::scheduler::TimerHandle;

type Release = Box<dyn FnOnce() + Send + Sync>;

/// Release actions for everything a mounted section acquired (timers,
/// listeners). They run once, newest first, on `release` or drop.
#[derive(Default)]
pub struct ScopedTeardown {
    releases: Vec<Release>,
}

impl ScopedTeardown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, release: impl FnOnce() + Send + Sync + 'static) {
        self.releases.push(Box::new(release));
    }

    pub fn track_timer<H: TimerHandle>(&mut self, handle: H) {
        self.push(move || handle.cancel());
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn release_all(&mut self) {
        while let Some(release) = self.releases.pop() {
            release();
        }
    }

    pub fn release(mut self) {
        self.release_all();
    }
}

impl Drop for ScopedTeardown {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl fmt::Debug for ScopedTeardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedTeardown")
            .field("pending", &self.releases.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<u8>>>, impl Fn(u8) -> Box<dyn FnOnce() + Send + Sync>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_c = log.clone();
        let make = move |n: u8| {
            let log = log_c.clone();
            Box::new(move || log.lock().unwrap().push(n)) as Box<dyn FnOnce() + Send + Sync>
        };
        (log, make)
    }

    #[test]
    fn releases_newest_first_exactly_once() {
        let (log, make) = recorder();
        let mut teardown = ScopedTeardown::new();
        teardown.push(make(1));
        teardown.push(make(2));
        teardown.release_all();
        teardown.release_all();
        drop(teardown);
        assert_eq!(*log.lock().unwrap(), [2, 1]);
    }

    #[test]
    fn drop_releases() {
        let (log, make) = recorder();
        {
            let mut teardown = ScopedTeardown::new();
            teardown.push(make(7));
            assert_eq!(teardown.len(), 1);
        }
        assert_eq!(*log.lock().unwrap(), [7]);
    }
}
