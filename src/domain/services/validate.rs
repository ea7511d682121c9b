use chrono::NaiveDate;

/// Requests need 72 hours of lead time; a date exactly 3 days out is accepted.
pub const DIAS_MINIMOS_ANTICIPACION: i64 = 3;

pub fn dias_de_anticipacion(fecha: NaiveDate, hoy: NaiveDate) -> i64 {
    (fecha - hoy).num_days()
}

/// `HH:MM` strings order lexicographically, so a plain comparison is enough.
/// The interval is half-open, equality is invalid.
pub fn rango_valido(hora_inicio: &str, hora_fin: &str) -> bool {
    hora_inicio < hora_fin
}
