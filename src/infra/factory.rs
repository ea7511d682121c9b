use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use argon2::{password_hash::rand_core::OsRng, password_hash::SaltString, Argon2, PasswordHasher};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tera::Tera;
use tower_cookies::Key;
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::infra::repositories::sqlite_reservation_repo::SqliteReservationRepo;
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_migrations(&pool).await;

    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("confirmation.html", include_str!("../templates/confirmation.html")),
        ("login.html", include_str!("../templates/login.html")),
        ("admin.html", include_str!("../templates/admin.html")),
    ])
    .expect("Failed to load HTML templates");

    let salt = SaltString::generate(&mut OsRng);
    let admin_password_hash = Argon2::default()
        .hash_password(config.admin_password.as_bytes(), &salt)
        .expect("Failed to hash admin password")
        .to_string();

    let session_key = Key::derive_from(config.session_secret.as_bytes());

    AppState {
        config: config.clone(),
        reservation_repo: Arc::new(SqliteReservationRepo::new(pool.clone())),
        templates: Arc::new(tera),
        admin_password_hash,
        session_key,
    }
}

async fn run_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
