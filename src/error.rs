use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Letter error: {0}")]
    Letter(String),
    #[error("Report error: {0}")]
    Report(String),
    #[error("Internal server error")]
    Internal,
}

/// Validation failures surface to the visitor as a plain alert that navigates
/// back to the form, keeping whatever they already typed. No record is written.
fn alert_page(message: &str) -> Response {
    let safe = message.replace('"', "'");
    Html(format!(
        "<script>alert(\"{safe}\"); window.history.back();</script>"
    ))
    .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) | AppError::Conflict(msg) => alert_page(&msg),
            AppError::Unauthorized => Redirect::to("/login").into_response(),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor").into_response()
            }
            AppError::Template(e) => {
                error!("Template error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor").into_response()
            }
            AppError::Letter(msg) | AppError::Report(msg) => {
                error!("Export error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor").into_response()
            }
            AppError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor").into_response()
            }
        }
    }
}
