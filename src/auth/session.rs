//! Bridge between the token codec and the transport-level credential store
//! (an HTTP cookie).

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::auth::token::{Principal, SessionKeys};
use crate::config::AppConfig;

pub const SESSION_COOKIE: &str = "clinic_session";

/// Store a freshly issued token in the session cookie. HTTP-only and
/// same-site-lax; secure-flagged per environment; max age matches the token
/// validity window.
pub fn set(jar: CookieJar, token: String, config: &AppConfig) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.security.secure_cookies)
        .path("/")
        .max_age(time::Duration::days(config.security.session_ttl_days))
        .build();
    jar.add(cookie)
}

/// Remove the session cookie (logout).
pub fn clear(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/").build())
}

/// Read and verify the current session. Absent cookie and invalid token are
/// indistinguishable: both are "no session".
pub fn current(jar: &CookieJar, keys: &SessionKeys) -> Option<Principal> {
    let cookie = jar.get(SESSION_COOKIE)?;
    keys.verify(cookie.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::permission::Role;
    use crate::model::AdminUser;
    use chrono::Utc;
    use uuid::Uuid;

    fn test_config() -> AppConfig {
        AppConfig::development("unit-test-secret".to_string())
    }

    fn test_user() -> AdminUser {
        AdminUser {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            email: "admin@clinic.example".to_string(),
            password_hash: "unused".to_string(),
            name: "Administrator".to_string(),
            role: Role::Admin,
            active: true,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn set_then_current_resolves_the_principal() {
        let config = test_config();
        let keys = SessionKeys::new(&config.security.session_secret, 7);
        let user = test_user();
        let token = keys.issue(&user).unwrap();

        let jar = set(CookieJar::new(), token, &config);
        let cookie = jar.get(SESSION_COOKIE).expect("cookie should be set");
        assert!(cookie.http_only().unwrap_or(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));

        let principal = current(&jar, &keys).expect("session should resolve");
        assert_eq!(principal.user_id, user.id);
    }

    #[test]
    fn absent_cookie_is_no_session() {
        let config = test_config();
        let keys = SessionKeys::new(&config.security.session_secret, 7);
        assert!(current(&CookieJar::new(), &keys).is_none());
    }

    #[test]
    fn stale_cookie_is_no_session() {
        let config = test_config();
        let keys = SessionKeys::new(&config.security.session_secret, 7);
        let jar = set(CookieJar::new(), "not-a-valid-token".to_string(), &config);
        assert!(current(&jar, &keys).is_none());
    }
}
