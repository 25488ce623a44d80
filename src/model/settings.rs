use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Bilingual;

/// Site-wide settings singleton. Readable publicly; updates require the
/// manage_settings capability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_name: Bilingual,
    #[serde(default)]
    pub tagline: Bilingual,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub address: Bilingual,
    /// Platform name to profile URL, e.g. "instagram" -> "https://...".
    #[serde(default)]
    pub social_links: BTreeMap<String, String>,
}
