pub mod bilingual;
pub mod booking;
pub mod content;
pub mod settings;
pub mod user;

pub use bilingual::Bilingual;
pub use booking::{Booking, BookingRequest, BookingStatus};
pub use content::ContentCollection;
pub use settings::SiteSettings;
pub use user::{AdminUser, UserView};
