use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::permission::Role;

/// Persisted admin-area user record. This is the storage shape; API
/// responses always go through [`UserView`] so the password hash never
/// leaves the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Sanitized user shape for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<&AdminUser> for UserView {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            active: user.active,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_never_carries_the_password_hash() {
        let user = AdminUser {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            email: "admin@clinic.example".to_string(),
            password_hash: "$2b$04$secret-hash".to_string(),
            name: "Administrator".to_string(),
            role: Role::Admin,
            active: true,
            created_at: Utc::now(),
            last_login_at: None,
        };

        let serialized = serde_json::to_string(&UserView::from(&user)).unwrap();
        assert!(!serialized.contains("secret-hash"));
        assert!(!serialized.contains("password_hash"));
    }
}
