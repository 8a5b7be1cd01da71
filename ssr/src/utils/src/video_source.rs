use consts::hero::{VideoKey, VideoSourceError, TOTAL_VIDEOS};

/// Maps a 1-based clip ordinal to its asset URL
pub fn resolve(ordinal: usize) -> Result<&'static str, VideoSourceError> {
    VideoKey::from_ordinal(ordinal).map(VideoKey::url)
}

/// Ordinal actually played by the primary element for `current_index`.
/// The terminal index wraps back to the first clip.
pub fn primary_ordinal(current_index: usize) -> usize {
    if current_index == TOTAL_VIDEOS - 1 {
        1
    } else {
        current_index
    }
}

pub fn primary_source(current_index: usize) -> Result<&'static str, VideoSourceError> {
    resolve(primary_ordinal(current_index))
}
