pub mod hero;

pub const COMPANY_NAME: &str = "4DK Teams";

/// Fragment the "Our Portfolio" action scrolls to
pub const PORTFOLIO_ANCHOR: &str = "ourwork";

/// Viewports narrower than this are treated as handheld
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0;
