use log::Level;

pub const BRAND_NAME: &str = "Happirate";
pub const LOGO_PATH: &str = "/assets/happirate-logo.svg";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Read by the `.bg-hero` gradient; keep in sync with the backdrop stylesheet.
pub const POINTER_X_VAR: &str = "--pointer-x-percent";
pub const POINTER_Y_VAR: &str = "--pointer-y-percent";

pub const TOAST_DURATION_MS: u32 = 4_000;
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
