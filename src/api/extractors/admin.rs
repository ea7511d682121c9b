use crate::state::AppState;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};
use std::sync::Arc;
use tower_cookies::{Cookies, Key};

pub const SESSION_COOKIE: &str = "sesion_admin";

pub fn has_session(cookies: &Cookies, key: &Key) -> bool {
    cookies.signed(key).get(SESSION_COOKIE).is_some()
}

/// Marks a handler as director-only. A request without a valid signed
/// session cookie is redirected to the login page instead of erroring.
pub struct AdminSession;

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts
            .extensions
            .get::<Cookies>()
            .ok_or_else(|| Redirect::to("/login"))?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        if has_session(cookies, &app_state.session_key) {
            Ok(AdminSession)
        } else {
            Err(Redirect::to("/login"))
        }
    }
}
