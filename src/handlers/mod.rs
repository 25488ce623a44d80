pub mod admin;
pub mod public;

/// Collection file names for the non-content entities
pub const USERS_COLLECTION: &str = "users";
pub const BOOKINGS_COLLECTION: &str = "bookings";
pub const SETTINGS_OBJECT: &str = "settings";
