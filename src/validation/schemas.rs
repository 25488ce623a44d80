//! Per-entity validation schemas, defined once and reused by every
//! create/update flow for that entity.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::{FieldRule, Schema};
use crate::auth::permission::Role;
use crate::model::ContentCollection;

static SLUG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9][0-9\s-]{5,19}$").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap());

fn non_negative_number(value: &Value) -> Option<String> {
    match value.as_f64() {
        Some(n) if n >= 0.0 => None,
        _ => Some("Must be a non-negative number".to_string()),
    }
}

fn rating_1_to_5(value: &Value) -> Option<String> {
    match value.as_i64() {
        Some(n) if (1..=5).contains(&n) => None,
        _ => Some("Must be a rating from 1 to 5".to_string()),
    }
}

fn percent_0_to_100(value: &Value) -> Option<String> {
    match value.as_f64() {
        Some(n) if (0.0..=100.0).contains(&n) => None,
        _ => Some("Must be a percentage between 0 and 100".to_string()),
    }
}

fn known_role(value: &Value) -> Option<String> {
    match value.as_str().and_then(Role::parse) {
        Some(_) => None,
        None => Some("Must be one of: admin, editor, viewer".to_string()),
    }
}

static SERVICES: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field("title", FieldRule::bilingual().required())
        .field("description", FieldRule::bilingual().required())
        .field("price", FieldRule::text().custom(non_negative_number))
        .field("duration_minutes", FieldRule::text().custom(non_negative_number))
        .field("image", FieldRule::text())
});

static BRANCHES: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field("name", FieldRule::bilingual().required())
        .field("address", FieldRule::bilingual().required())
        .field("phone", FieldRule::text().required().pattern(&PHONE_RE))
        .field("working_hours", FieldRule::bilingual())
});

static TEAM: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field("name", FieldRule::bilingual().required())
        .field("position", FieldRule::bilingual().required())
        .field("bio", FieldRule::bilingual())
        .field("photo", FieldRule::text())
});

static BLOG: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field("title", FieldRule::bilingual().required())
        .field("slug", FieldRule::text().required().max_length(80).pattern(&SLUG_RE))
        .field("excerpt", FieldRule::bilingual())
        .field("content", FieldRule::bilingual().required())
        .field("cover_image", FieldRule::text())
});

static TESTIMONIALS: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field("name", FieldRule::text().required().min_length(2).max_length(100))
        .field("quote", FieldRule::bilingual().required())
        .field("rating", FieldRule::text().custom(rating_1_to_5))
});

static OFFERS: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field("title", FieldRule::bilingual().required())
        .field("description", FieldRule::bilingual())
        .field("discount_percent", FieldRule::text().custom(percent_0_to_100))
        .field("valid_until", FieldRule::text().pattern(&DATE_RE))
        .field("image", FieldRule::text())
});

static GALLERY: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field("title", FieldRule::bilingual())
        .field("image", FieldRule::text().required())
        .field("category", FieldRule::text().pattern(&SLUG_RE))
});

static BOOKING: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field("customer_name", FieldRule::text().required().min_length(2).max_length(100))
        .field("phone", FieldRule::text().required().pattern(&PHONE_RE))
        .field("email", FieldRule::text().pattern(&EMAIL_RE))
        .field("preferred_date", FieldRule::text().required().pattern(&DATE_RE))
        .field("message", FieldRule::text().max_length(1000))
});

static USER: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            "username",
            FieldRule::text().required().min_length(3).max_length(50).pattern(&USERNAME_RE),
        )
        .field("email", FieldRule::text().required().pattern(&EMAIL_RE))
        .field("password", FieldRule::text().required().min_length(8))
        .field("name", FieldRule::text().required().min_length(2).max_length(100))
        .field("role", FieldRule::text().required().custom(known_role))
});

static SETTINGS: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field("site_name", FieldRule::bilingual().required())
        .field("tagline", FieldRule::bilingual())
        .field("contact_email", FieldRule::text().required().pattern(&EMAIL_RE))
        .field("contact_phone", FieldRule::text().required().pattern(&PHONE_RE))
        .field("address", FieldRule::bilingual())
});

pub fn content(collection: ContentCollection) -> &'static Schema {
    match collection {
        ContentCollection::Services => &SERVICES,
        ContentCollection::Branches => &BRANCHES,
        ContentCollection::Team => &TEAM,
        ContentCollection::Blog => &BLOG,
        ContentCollection::Testimonials => &TESTIMONIALS,
        ContentCollection::Offers => &OFFERS,
        ContentCollection::Gallery => &GALLERY,
    }
}

pub fn booking() -> &'static Schema {
    &BOOKING
}

/// Same date shape the booking schema enforces, for single-field checks on
/// staff edits.
pub fn valid_booking_date(date: &str) -> bool {
    DATE_RE.is_match(date)
}

pub fn user() -> &'static Schema {
    &USER
}

pub fn settings() -> &'static Schema {
    &SETTINGS
}
