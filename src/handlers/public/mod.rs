pub mod auth;
pub mod booking;
pub mod content;
pub mod settings;
