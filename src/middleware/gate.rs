//! Edge route gate for the admin area.
//!
//! Evaluated statelessly on every request under the protected prefix: either
//! the cookie holds a verifiable token or it does not. A syntactically
//! present but invalid cookie on the login screen falls through so the user
//! can see the login form again.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::session;
use crate::state::AppState;

pub const ADMIN_ROOT: &str = "/admin";
pub const ADMIN_LOGIN: &str = "/admin/login";

pub async fn admin_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let authenticated = session::current(&jar, &state.keys).is_some();
    let at_login = request.uri().path() == ADMIN_LOGIN;

    match (authenticated, at_login) {
        // Already logged in; keep them out of the login screen
        (true, true) => Redirect::to(ADMIN_ROOT).into_response(),
        // No valid credential anywhere else in the admin area
        (false, false) => Redirect::to(ADMIN_LOGIN).into_response(),
        _ => next.run(request).await,
    }
}
