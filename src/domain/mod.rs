pub mod opportunity;
pub mod privacy;
pub mod profile;
pub mod status;

/// Visit count at which an opportunity is flagged popular.
pub const POPULAR_VISIT_THRESHOLD: i64 = 300;

/// An active opportunity whose deadline falls within this many days is closing soon.
pub const CLOSING_SOON_WINDOW_DAYS: i64 = 3;

/// Age in days after which an opportunity stops counting as new.
pub const NEW_WINDOW_DAYS: i64 = 7;
