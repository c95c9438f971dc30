use log::Level;

use crate::state::theme::Theme;

pub const SITE_NAME: &str = "Pollinate IQ";
pub const TAGLINE: &str = "Digital Solutions for Growth";

/// Theme used when nothing valid is persisted.
pub const DEFAULT_THEME: Theme = Theme::Light;
pub const THEME_KEY: &str = "theme";
pub const SPLASH_SEEN_KEY: &str = "hasSeenSplash";
pub const SPLASH_DURATION_MS: u32 = 3500;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 300.0;

pub const TESTIMONIAL_INTERVAL_MS: u32 = 8000;
pub const CONTACT_SUBMIT_DELAY_MS: u32 = 1500;

pub const CONTACT_EMAIL: &str = "info@pollinateiq.co.za";
pub const CONTACT_PHONE: &str = "+27 81 325 6906";
pub const CONTACT_ADDRESS: &str = "67th on 7th, 7th Ave, Edenvale, Gauteng, 1609";
pub const WHATSAPP_URL: &str =
    "https://wa.me/27813256906?text=Hi%20Pollinate%20IQ!%20I'm%20interested%20in%20your%20digital%20services.";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
