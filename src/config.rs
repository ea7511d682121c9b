use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_password: String,
    pub session_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://reservalab.db?mode=rwc".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
            // Key derivation requires at least 32 bytes of material.
            session_secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| "reservalab-secreto-de-sesion-por-defecto-cambiar".to_string()),
        }
    }
}
