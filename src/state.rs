use crate::config::Config;
use crate::domain::ports::ReservationRepository;
use std::sync::Arc;
use tera::Tera;
use tower_cookies::Key;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub reservation_repo: Arc<dyn ReservationRepository>,
    pub templates: Arc<Tera>,
    /// Argon2 hash of the shared director password, computed at bootstrap.
    pub admin_password_hash: String,
    /// Key for the signed session cookie.
    pub session_key: Key,
}
