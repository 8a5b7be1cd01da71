use thiserror::Error;
use web_time::Duration;

/// Number of clips in the hero registry
pub const TOTAL_VIDEOS: usize = 4;

/// Delay between the first playable clip and hiding the spinner
pub const LOAD_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// How often the watchdog checks that the primary clip is still advancing
pub const WATCHDOG_POLL_INTERVAL: Duration = Duration::from_millis(1000);

pub const HERO_POSTER: &str = "/img/hero-poster.webp";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VideoKey {
    Hero1,
    Hero2,
    Hero3,
    Hero4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum VideoSourceError {
    #[error("video ordinal {0} is outside the hero registry")]
    OrdinalOutOfRange(usize),
}

impl VideoKey {
    /// Positional order of the registry, ordinal 1 first
    pub const ALL: [VideoKey; TOTAL_VIDEOS] = [
        VideoKey::Hero1,
        VideoKey::Hero2,
        VideoKey::Hero3,
        VideoKey::Hero4,
    ];

    pub fn from_ordinal(ordinal: usize) -> Result<Self, VideoSourceError> {
        ordinal
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(VideoSourceError::OrdinalOutOfRange(ordinal))
    }

    pub fn url(self) -> &'static str {
        match self {
            VideoKey::Hero1 => "/videos/hero-1.mp4",
            VideoKey::Hero2 => "/videos/hero-2.mp4",
            VideoKey::Hero3 => "/videos/hero-3.mp4",
            VideoKey::Hero4 => "/videos/hero-4.mp4",
        }
    }
}
