//! First-run seeding. A fresh deployment has no users at all, which would
//! make the admin area permanently unreachable.

use anyhow::Context;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::permission::Role;
use crate::handlers::USERS_COLLECTION;
use crate::model::AdminUser;
use crate::state::AppState;

/// If the users collection is empty and `CLINIC_ADMIN_PASSWORD` is set,
/// create an active admin account named `admin`. An unset password only
/// warns, but a failure while seeding aborts startup.
pub fn ensure_admin_user(state: &AppState) -> anyhow::Result<()> {
    let users: Vec<AdminUser> = state.store.collection(USERS_COLLECTION)?;
    if !users.is_empty() {
        return Ok(());
    }

    let Ok(password) = std::env::var("CLINIC_ADMIN_PASSWORD") else {
        tracing::warn!(
            "no users exist and CLINIC_ADMIN_PASSWORD is unset; the admin area cannot be used"
        );
        return Ok(());
    };

    let password_hash = bcrypt::hash(&password, state.config.security.bcrypt_cost)
        .context("could not hash the seed admin password")?;

    let admin = AdminUser {
        id: Uuid::new_v4(),
        username: "admin".to_string(),
        email: "admin@localhost".to_string(),
        password_hash,
        name: "Administrator".to_string(),
        role: Role::Admin,
        active: true,
        created_at: Utc::now(),
        last_login_at: None,
    };

    state.store.replace(USERS_COLLECTION, &[admin])?;
    tracing::info!("seeded initial admin user");
    Ok(())
}
