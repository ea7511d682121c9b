use crate::api::dtos::requests::LoginRequest;
use crate::api::extractors::admin::{self, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use rand::{distributions::Alphanumeric, Rng};
use std::sync::Arc;
use tera::Context;
use time::Duration;
use tower_cookies::{cookie::SameSite, Cookie, Cookies};
use tracing::{info, warn};

pub async fn login_page(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let mut ctx = Context::new();
    ctx.insert("admin", &admin::has_session(&cookies, &state.session_key));
    Ok(Html(state.templates.render("login.html", &ctx)?))
}

/// Shared-credential login: on a matching password a signed session cookie
/// marks the administrator.
pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Form(payload): Form<LoginRequest>,
) -> Result<Redirect, AppError> {
    let parsed_hash =
        PasswordHash::new(&state.admin_password_hash).map_err(|_| AppError::Internal)?;

    if Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .is_err()
    {
        warn!("Failed admin login attempt");
        return Err(AppError::Validation("Contraseña incorrecta.".to_string()));
    }

    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();

    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_max_age(Duration::hours(8));
    cookies.signed(&state.session_key).add(cookie);

    info!("Director logged in");
    Ok(Redirect::to("/admin"))
}

pub async fn logout(State(state): State<Arc<AppState>>, cookies: Cookies) -> Redirect {
    cookies
        .signed(&state.session_key)
        .remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    info!("Director logged out");
    Redirect::to("/reservalab")
}
