use serde::Deserialize;

/// Form fields of the public reservation form. `inicio`/`fin` match the
/// input names of the HTML form.
#[derive(Deserialize)]
pub struct CreateReservationRequest {
    pub nombre: String,
    pub registro: String,
    pub ci: String,
    pub celular: String,
    pub email: String,
    pub responsable_actividad: Option<String>,
    pub tipo_actividad: String,
    pub objetivo: String,
    pub fecha: String,
    pub inicio: String,
    pub fin: String,
    pub participantes: i64,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Deserialize)]
pub struct DecisionRequest {
    pub id: i64,
    pub accion: String,
}
