use crate::domain::services::letter;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use chrono::Local;
use std::sync::Arc;

/// Inline PDF of the formal request letter for one reservation.
pub async fn descargar_carta(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let reserva = state
        .reservation_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

    let bytes = letter::render(&reserva, Local::now().date_naive())?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("inline; filename=Carta_{id}.pdf"),
        ),
    ];
    Ok((headers, bytes))
}
