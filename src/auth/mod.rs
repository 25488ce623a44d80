pub mod permission;
pub mod session;
pub mod token;

pub use permission::{Capability, Role};
pub use token::{Claims, Principal, SessionKeys};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use std::convert::Infallible;

use crate::error::ApiError;
use crate::state::AppState;

/// Per-request session context, constructed once at the boundary by the
/// extractor and passed explicitly to handlers. `None` means no valid
/// credential was presented, for any reason.
#[derive(Debug, Clone)]
pub struct Session(pub Option<Principal>);

#[axum::async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Infallible> {
        let jar = match CookieJar::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(err) => match err {},
        };
        Ok(Session(session::current(&jar, &state.keys)))
    }
}

/// The per-handler authorization contract: every protected operation calls
/// this before touching the store, even though the route gate already
/// screened page navigation. API routes are invoked directly and must refuse
/// unauthorized calls on their own.
pub fn authorize(session: &Session, capability: Capability) -> Result<&Principal, ApiError> {
    let principal = session.0.as_ref().ok_or_else(ApiError::unauthorized)?;

    if principal.role.allows(capability) {
        return Ok(principal);
    }

    Err(match capability {
        Capability::ManageUsers | Capability::ManageSettings => {
            ApiError::forbidden(format!("{} permission required", capability.as_str()))
        }
        Capability::Read | Capability::Write => ApiError::forbidden("Forbidden"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn session_for(role: Role) -> Session {
        Session(Some(Principal {
            user_id: Uuid::new_v4(),
            username: "someone".to_string(),
            role,
            name: "Someone".to_string(),
        }))
    }

    #[test]
    fn missing_session_is_unauthorized() {
        let err = authorize(&Session(None), Capability::Read).unwrap_err();
        assert_eq!(err.error_code(), "UNAUTHORIZED");
    }

    #[test]
    fn insufficient_role_is_forbidden() {
        let err = authorize(&session_for(Role::Viewer), Capability::Write).unwrap_err();
        assert_eq!(err.error_code(), "FORBIDDEN");
        assert_eq!(err.message(), "Forbidden");
    }

    #[test]
    fn privileged_denials_name_the_capability() {
        let err = authorize(&session_for(Role::Editor), Capability::ManageUsers).unwrap_err();
        assert_eq!(err.message(), "manage_users permission required");

        let err = authorize(&session_for(Role::Editor), Capability::ManageSettings).unwrap_err();
        assert_eq!(err.message(), "manage_settings permission required");
    }

    #[test]
    fn sufficient_role_returns_the_principal() {
        let session = session_for(Role::Editor);
        let principal = authorize(&session, Capability::Write).unwrap();
        assert_eq!(principal.role, Role::Editor);
    }
}
