use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado de una reserva. Stored as TEXT, created as `Pendiente` and decided
/// exactly once by the director.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ReservationStatus {
    Pendiente,
    Aprobada,
    Rechazada,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pendiente => "Pendiente",
            ReservationStatus::Aprobada => "Aprobada",
            ReservationStatus::Rechazada => "Rechazada",
        }
    }
}

/// One request to use the laboratory for a time window. `fecha` is
/// `YYYY-MM-DD` and the times are `HH:MM`, so the half-open interval
/// `[hora_inicio, hora_fin)` compares correctly as text.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Reservation {
    pub id: i64,
    pub nombre: String,
    pub registro: String,
    pub ci: String,
    pub celular: String,
    pub email: String,
    pub responsable_actividad: String,
    pub tipo_actividad: String,
    pub objetivo: String,
    pub fecha: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub participantes: i64,
    pub estado: ReservationStatus,
}

/// Field set for a submission, before the database assigns an id.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub nombre: String,
    pub registro: String,
    pub ci: String,
    pub celular: String,
    pub email: String,
    pub responsable_actividad: String,
    pub tipo_actividad: String,
    pub objetivo: String,
    pub fecha: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub participantes: i64,
}
