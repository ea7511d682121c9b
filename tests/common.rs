use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use chrono::{Duration, Local};
use reservalab::{api::router::create_router, config::Config, infra::factory::bootstrap_state};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub db_filename: String,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let config = Config {
            database_url: format!("sqlite://{}?mode=rwc", db_filename),
            port: 0,
            admin_password: "director123".to_string(),
            session_secret: "secreto-de-sesion-para-pruebas-suficientemente-largo".to_string(),
        };

        let state = bootstrap_state(&config).await;
        let router = create_router(Arc::new(state));

        Self { router, db_filename }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(c) = cookie {
            builder = builder.header(header::COOKIE, c);
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(
        &self,
        uri: &str,
        form: &[(&str, String)],
        cookie: Option<&str>,
    ) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(c) = cookie {
            builder = builder.header(header::COOKIE, c);
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::from(encode_form(form))).unwrap())
            .await
            .unwrap()
    }

    pub async fn submit(&self, form: &[(&str, String)]) -> Response {
        self.post_form("/reservar", form, None).await
    }

    /// Logs in with the given password and returns the `sesion_admin` cookie
    /// pair if the server set one.
    pub async fn login(&self, password: &str) -> Option<String> {
        let response = self
            .post_form("/login", &[("password", password.to_string())], None)
            .await;

        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .find(|c| c.starts_with("sesion_admin="))
            .map(|c| c.split(';').next().unwrap().to_string())
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", self.db_filename, suffix));
        }
    }
}

/// A complete, valid form submission for the given slot.
#[allow(dead_code)]
pub fn reservation_form(
    nombre: &str,
    fecha: &str,
    inicio: &str,
    fin: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("nombre", nombre.to_string()),
        ("registro", "219004455".to_string()),
        ("ci", "7654321 SC".to_string()),
        ("celular", "70098765".to_string()),
        ("email", "solicitante@uagrm.edu.bo".to_string()),
        ("responsable_actividad", String::new()),
        ("tipo_actividad", "Seminario".to_string()),
        ("objetivo", "Sesión de trabajo del grupo de investigación".to_string()),
        ("fecha", fecha.to_string()),
        ("inicio", inicio.to_string()),
        ("fin", fin.to_string()),
        ("participantes", "15".to_string()),
    ]
}

/// `YYYY-MM-DD` for today plus `dias`, using the same local clock as the
/// submission handler.
#[allow(dead_code)]
pub fn fecha_en_dias(dias: i64) -> String {
    (Local::now().date_naive() + Duration::days(dias))
        .format("%Y-%m-%d")
        .to_string()
}

#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8_lossy(&bytes).to_string()
}

fn encode_form(form: &[(&str, String)]) -> String {
    form.iter()
        .map(|(k, v)| format!("{}={}", k, urlencode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn urlencode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            b' ' => "+".to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect()
}
