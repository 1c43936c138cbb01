/// Compile-time settings for the profile screen

/// Window title
pub const APP_TITLE: &str = "Profiles";

/// Phone-shaped window (logical pixels)
pub const WINDOW_WIDTH: f32 = 420.0;
pub const WINDOW_HEIGHT: f32 = 780.0;

/// Youngest age allowed to edit a profile
pub const MIN_EDIT_AGE: u32 = 18;

pub const SEARCH_PLACEHOLDER: &str = "Search user";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
