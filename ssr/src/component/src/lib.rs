pub mod cta_button;
pub mod spinner;
