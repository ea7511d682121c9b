use crate::api::dtos::requests::DecisionRequest;
use crate::api::extractors::admin::AdminSession;
use crate::domain::models::reservation::ReservationStatus;
use crate::domain::services::report;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use std::sync::Arc;
use tera::Context;
use tracing::{info, warn};

/// Pending-reservation queue for the director.
pub async fn panel(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
) -> Result<Html<String>, AppError> {
    let pendientes = state.reservation_repo.list_pending().await?;

    let mut ctx = Context::new();
    ctx.insert("pendientes", &pendientes);
    ctx.insert("admin", &true);
    Ok(Html(state.templates.render("admin.html", &ctx)?))
}

pub async fn procesar_reserva(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    Form(payload): Form<DecisionRequest>,
) -> Result<Redirect, AppError> {
    let estado = if payload.accion == "Aprobar" {
        ReservationStatus::Aprobada
    } else {
        ReservationStatus::Rechazada
    };

    let cambiada = state.reservation_repo.decide(payload.id, estado).await?;
    if cambiada {
        info!("Reserva {} decidida: {}", payload.id, estado.as_str());
    } else {
        warn!("Reserva {} ya estaba decidida, sin cambios", payload.id);
    }

    Ok(Redirect::to("/admin"))
}

/// Full CSV dump of the reservation table, every estado included.
pub async fn descargar_reporte(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let reservas = state.reservation_repo.list_all().await?;
    let bytes = report::render(&reservas)?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=reporte.csv".to_string(),
        ),
    ];
    Ok((headers, bytes))
}
