use consts::MOBILE_MAX_WIDTH_PX;

const HANDHELD_MARKERS: &[&str] = &[
    "Android",
    "iPhone",
    "iPad",
    "iPod",
    "Mobile",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

/// Form factor decided once per mount
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceClass {
    pub is_mobile: bool,
}

impl DeviceClass {
    pub fn classify(user_agent: &str, viewport_width: Option<f64>) -> Self {
        let handheld_ua = HANDHELD_MARKERS.iter().any(|m| user_agent.contains(m));
        let narrow = viewport_width.is_some_and(|w| w < MOBILE_MAX_WIDTH_PX);
        Self {
            is_mobile: handheld_ua || narrow,
        }
    }

    /// Probes the browser window. Client only.
    pub fn detect() -> Self {
        let window = leptos::prelude::window();
        let user_agent = window.navigator().user_agent().unwrap_or_default();
        let width = window.inner_width().ok().and_then(|w| w.as_f64());
        let class = Self::classify(&user_agent, width);
        log::debug!("device classified as mobile={}", class.is_mobile);
        class
    }
}

/// The preview clip only exists once the client is known to be a desktop
pub fn shows_preview(class: Option<DeviceClass>) -> bool {
    class.is_some_and(|c| !c.is_mobile)
}
