use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("couldn't set location fragment: {0}")]
    Fragment(String),
}

/// Something holding a URL fragment, normally `window().location()`
pub trait FragmentTarget {
    fn set_fragment(&self, fragment: &str) -> Result<(), NavError>;
}

impl FragmentTarget for web_sys::Location {
    fn set_fragment(&self, fragment: &str) -> Result<(), NavError> {
        self.set_hash(fragment)
            .map_err(|e| NavError::Fragment(format!("{e:?}")))
    }
}

/// Scrolls to `anchor`. The fragment is cleared first so that asking for
/// the same anchor twice still triggers the browser's anchor scroll.
pub fn jump_to_anchor(target: &impl FragmentTarget, anchor: &str) -> Result<(), NavError> {
    target.set_fragment("")?;
    target.set_fragment(anchor)
}
