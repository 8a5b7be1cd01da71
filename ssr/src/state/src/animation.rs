use leptos::prelude::*;
use leptos_use::use_media_query;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationSettings {
    pub should_animate: bool,
    pub enable_video_autoplay: bool,
    pub enable_hover_effects: bool,
}

impl AnimationSettings {
    pub fn from_reduced_motion(reduced_motion: bool) -> Self {
        Self {
            should_animate: !reduced_motion,
            enable_video_autoplay: !reduced_motion,
            enable_hover_effects: !reduced_motion,
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self::from_reduced_motion(false)
    }
}

/// Tracks `prefers-reduced-motion`
pub fn use_animation_settings() -> Signal<AnimationSettings> {
    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");
    Signal::derive(move || AnimationSettings::from_reduced_motion(reduced_motion.get()))
}
