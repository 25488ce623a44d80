pub mod bookings;
pub mod content;
pub mod pages;
pub mod settings;
pub mod users;
