use crate::domain::models::reservation::Reservation;
use crate::error::AppError;

const COLUMNAS: [&str; 14] = [
    "id",
    "nombre",
    "registro",
    "ci",
    "celular",
    "email",
    "responsable_actividad",
    "tipo_actividad",
    "objetivo",
    "fecha",
    "hora_inicio",
    "hora_fin",
    "participantes",
    "estado",
];

/// Serializes every reservation, whatever its estado, into CSV with a header
/// row matching the table columns. The header is written explicitly so an
/// empty table still yields a well-formed report.
pub fn render(reservas: &[Reservation]) -> Result<Vec<u8>, AppError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(COLUMNAS)
        .map_err(|e| AppError::Report(e.to_string()))?;
    for reserva in reservas {
        wtr.serialize(reserva)
            .map_err(|e| AppError::Report(e.to_string()))?;
    }

    wtr.into_inner().map_err(|e| AppError::Report(e.to_string()))
}
