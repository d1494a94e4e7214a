use log::Level;

pub const BRAND: &str = "Growth Studio";

/// Budget for a nav link scroll to reach its section.
pub const NAV_SCROLL_DURATION_MS: f64 = 500.0;
pub const TOP_SCROLL_DURATION_MS: f64 = 1000.0;

pub const MOBILE_BREAKPOINT_PX: u32 = 768;
pub const SMALL_BREAKPOINT_PX: u32 = 480;

/// Element the server-rendered markup lives in and the client hydrates.
pub const APP_ROOT_ID: &str = "app";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose scroll/animation logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
