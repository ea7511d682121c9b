use crate::api::dtos::requests::CreateReservationRequest;
use crate::api::extractors::admin;
use crate::domain::models::reservation::NewReservation;
use crate::domain::services::validate::{
    dias_de_anticipacion, rango_valido, DIAS_MINIMOS_ANTICIPACION,
};
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use chrono::{Local, NaiveDate, NaiveTime};
use std::sync::Arc;
use tera::Context;
use tower_cookies::Cookies;
use tracing::info;

pub async fn home() -> Redirect {
    Redirect::to("/reservalab")
}

/// Public page: the request form next to the occupancy calendar.
pub async fn index(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let reservas = state.reservation_repo.list_public().await?;

    let mut ctx = Context::new();
    ctx.insert("reservas", &reservas);
    ctx.insert("admin", &admin::has_session(&cookies, &state.session_key));
    Ok(Html(state.templates.render("index.html", &ctx)?))
}

pub async fn crear_reserva(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Form(payload): Form<CreateReservationRequest>,
) -> Result<Html<String>, AppError> {
    let nueva = validar(payload)?;

    let fecha = NaiveDate::parse_from_str(&nueva.fecha, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("La fecha solicitada no es válida.".to_string()))?;
    for hora in [&nueva.hora_inicio, &nueva.hora_fin] {
        NaiveTime::parse_from_str(hora, "%H:%M")
            .map_err(|_| AppError::Validation("El horario solicitado no es válido.".to_string()))?;
    }

    let hoy = Local::now().date_naive();
    if dias_de_anticipacion(fecha, hoy) < DIAS_MINIMOS_ANTICIPACION {
        return Err(AppError::Validation(
            "Se requieren 72 horas de anticipación.".to_string(),
        ));
    }
    if !rango_valido(&nueva.hora_inicio, &nueva.hora_fin) {
        return Err(AppError::Validation(
            "La hora de inicio debe ser anterior a la hora de fin.".to_string(),
        ));
    }

    // The overlap check runs inside the insert transaction.
    let creada = state.reservation_repo.create_if_free(&nueva).await?;
    info!("Reserva creada: {} ({} {}-{})", creada.id, creada.fecha, creada.hora_inicio, creada.hora_fin);

    let mut ctx = Context::new();
    ctx.insert("id", &creada.id);
    ctx.insert("admin", &admin::has_session(&cookies, &state.session_key));
    Ok(Html(state.templates.render("confirmation.html", &ctx)?))
}

fn validar(payload: CreateReservationRequest) -> Result<NewReservation, AppError> {
    let requeridos = [
        &payload.nombre,
        &payload.registro,
        &payload.ci,
        &payload.celular,
        &payload.email,
        &payload.tipo_actividad,
        &payload.objetivo,
        &payload.fecha,
        &payload.inicio,
        &payload.fin,
    ];
    if requeridos.iter().any(|campo| campo.trim().is_empty()) {
        return Err(AppError::Validation(
            "Complete todos los campos requeridos.".to_string(),
        ));
    }

    let responsable = payload
        .responsable_actividad
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| payload.nombre.clone());

    Ok(NewReservation {
        nombre: payload.nombre,
        registro: payload.registro,
        ci: payload.ci,
        celular: payload.celular,
        email: payload.email,
        responsable_actividad: responsable,
        tipo_actividad: payload.tipo_actividad,
        objetivo: payload.objetivo,
        fecha: payload.fecha,
        hora_inicio: payload.inicio,
        hora_fin: payload.fin,
        participantes: payload.participantes,
    })
}
