use log::Level;

/// localStorage key holding the JSON list of accepted submissions.
pub const STORAGE_KEY: &str = "fmp_submissions";

pub const DASHBOARD_SECTION_ID: &str = "dashboardSection";

// Delays for the fire-and-forget UI effects, in milliseconds.
pub const TOAST_DISMISS_MS: u32 = 4_500;
pub const CTA_PULSE_MS: u32 = 240;
pub const TOGGLE_INTRO_MS: u32 = 1_100;
pub const TOGGLE_REPLAY_MS: u32 = 900;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
