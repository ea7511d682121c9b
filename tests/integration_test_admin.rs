mod common;

use axum::http::{header, StatusCode};
use common::{body_string, fecha_en_dias, reservation_form, TestApp};

#[tokio::test]
async fn admin_sin_sesion_redirige_al_login() {
    let app = TestApp::new().await;

    for uri in ["/admin", "/descargar_reporte"] {
        let res = app.get(uri, None).await;
        assert!(res.status().is_redirection(), "{uri} should redirect");
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/login");
    }

    let res = app
        .post_form(
            "/procesar_reserva",
            &[("id", "1".to_string()), ("accion", "Aprobar".to_string())],
            None,
        )
        .await;
    assert!(res.status().is_redirection());
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn contrasena_incorrecta_no_abre_sesion() {
    let app = TestApp::new().await;

    let cookie = app.login("incorrecta").await;
    assert!(cookie.is_none());
}

#[tokio::test]
async fn contrasena_correcta_permite_el_panel() {
    let app = TestApp::new().await;

    let cookie = app.login("director123").await.expect("login");
    let res = app.get("/admin", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_string(res).await.contains("Pendientes"));
}

#[tokio::test]
async fn aprobar_saca_la_reserva_de_la_cola() {
    let app = TestApp::new().await;

    app.submit(&reservation_form("Valeria Rocha", &fecha_en_dias(4), "09:00", "10:00"))
        .await;

    let cookie = app.login("director123").await.expect("login");
    let panel = body_string(app.get("/admin", Some(&cookie)).await).await;
    assert!(panel.contains("Valeria Rocha"));

    let res = app
        .post_form(
            "/procesar_reserva",
            &[("id", "1".to_string()), ("accion", "Aprobar".to_string())],
            Some(&cookie),
        )
        .await;
    assert!(res.status().is_redirection());
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/admin");

    let panel = body_string(app.get("/admin", Some(&cookie)).await).await;
    assert!(!panel.contains("Valeria Rocha"));

    let listado = body_string(app.get("/reservalab", None).await).await;
    assert!(listado.contains("Aprobada"));
}

#[tokio::test]
async fn una_reserva_decidida_no_se_vuelve_a_procesar() {
    let app = TestApp::new().await;

    app.submit(&reservation_form("Valeria Rocha", &fecha_en_dias(4), "09:00", "10:00"))
        .await;

    let cookie = app.login("director123").await.expect("login");
    app.post_form(
        "/procesar_reserva",
        &[("id", "1".to_string()), ("accion", "Aprobar".to_string())],
        Some(&cookie),
    )
    .await;
    // The second decision hits an already-decided row and changes nothing.
    app.post_form(
        "/procesar_reserva",
        &[("id", "1".to_string()), ("accion", "Rechazar".to_string())],
        Some(&cookie),
    )
    .await;

    let reporte = body_string(app.get("/descargar_reporte", Some(&cookie)).await).await;
    assert!(reporte.contains("Aprobada"));
    assert!(!reporte.contains("Rechazada"));
}

#[tokio::test]
async fn el_reporte_incluye_todas_las_filas() {
    let app = TestApp::new().await;

    app.submit(&reservation_form("Primera Persona", &fecha_en_dias(4), "09:00", "10:00"))
        .await;
    app.submit(&reservation_form("Segunda Persona", &fecha_en_dias(5), "10:00", "11:00"))
        .await;

    let cookie = app.login("director123").await.expect("login");
    app.post_form(
        "/procesar_reserva",
        &[("id", "2".to_string()), ("accion", "Rechazar".to_string())],
        Some(&cookie),
    )
    .await;

    let res = app.get("/descargar_reporte", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers().get(header::CONTENT_TYPE).unwrap(), "text/csv");

    let csv = body_string(res).await;
    let lineas: Vec<&str> = csv.lines().collect();
    assert_eq!(lineas.len(), 3);
    assert!(lineas[0].starts_with("id,nombre,registro"));
    assert!(csv.contains("Rechazada"));
}

#[tokio::test]
async fn logout_redirige_al_inicio() {
    let app = TestApp::new().await;

    let cookie = app.login("director123").await.expect("login");
    let res = app.get("/logout", Some(&cookie)).await;
    assert!(res.status().is_redirection());
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/reservalab");
}

#[tokio::test]
async fn responsable_por_defecto_es_el_solicitante() {
    let app = TestApp::new().await;

    app.submit(&reservation_form("Marco Antelo", &fecha_en_dias(4), "09:00", "10:00"))
        .await;

    let cookie = app.login("director123").await.expect("login");
    let csv = body_string(app.get("/descargar_reporte", Some(&cookie)).await).await;
    let fila = csv.lines().nth(1).unwrap();
    assert_eq!(fila.matches("Marco Antelo").count(), 2);
}
