pub mod animation;
pub mod theme;
