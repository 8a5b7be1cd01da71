use leptos::prelude::*;
use leptos_use::use_preferred_dark;

/// Light/dark flag shared across the page, seeded from `prefers-color-scheme`
#[derive(Clone, Copy, Debug)]
pub struct ThemeCtx {
    pub is_dark: RwSignal<bool>,
}

impl ThemeCtx {
    pub fn from_preference() -> Self {
        let preferred_dark = use_preferred_dark();
        let is_dark = RwSignal::new(preferred_dark.get_untracked());
        Effect::new(move |_| is_dark.set(preferred_dark.get()));
        Self { is_dark }
    }
}

pub fn use_theme() -> ThemeCtx {
    expect_context()
}
