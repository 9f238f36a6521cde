use super::common::setup;
use brisa_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

fn incidents_body() -> String {
    json!([
        {"id_incidente": 1, "fecha": "2025-04-01", "estado": "abierto", "estudiantes": [31]},
        {"id_incidente": 2, "fecha": "2025-04-02", "estado": "cerrado"}
    ])
    .to_string()
}

#[tokio::test]
async fn test_list_incidents_under_incident_prefix() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("GET", "/api/incidentes/Incidentes/incidentes")
        .with_status(200)
        .with_body(incidents_body())
        .create_async()
        .await;

    let service = IncidentServiceImpl::new(ctx.client.clone());
    let incidents = service.list_incidents().await.unwrap();

    mock.assert_async().await;
    assert_eq!(incidents.len(), 2);
    assert_eq!(incidents[0].estudiantes, vec![31]);
    assert!(incidents[1].profesores.is_empty());
}

#[tokio::test]
async fn test_modify_incident_sends_modifying_user() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("PATCH", "/api/incidentes/Incidentes/modificaciones/1")
        .match_body(Matcher::Json(json!({"estado": "cerrado", "id_usuario_modifica": 5})))
        .with_status(200)
        .with_body(r#"{"ok": true}"#)
        .create_async()
        .await;

    let service = IncidentServiceImpl::new(ctx.client.clone());
    let update = IncidentUpdate {
        estado: Some("cerrado".to_string()),
        id_usuario_modifica: 5,
        ..Default::default()
    };
    service.modify_incident(1, &update).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_attachment_with_uploader() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("POST", "/api/incidentes/Incidentes/adjuntos/1?id_subido_por=5")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_body(Matcher::Regex(
            "name=\"archivo\"; filename=\"acta.pdf\"".to_string(),
        ))
        .with_status(201)
        .with_body(
            json!({
                "id_adjunto": 9,
                "id_incidente": 1,
                "nombre_archivo": "acta.pdf",
                "tipo_mime": "application/pdf",
                "id_subido_por": 5,
                "fecha_subida": "2025-04-01T09:00:00"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let service = IncidentServiceImpl::new(ctx.client.clone());
    let file = UploadFile::new("acta.pdf", "application/pdf", b"%PDF-1.4".to_vec());
    let attachment = service.upload_attachment(1, file, Some(5)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(attachment.id_adjunto, 9);
}

#[tokio::test]
async fn test_download_attachment_default_filename() {
    let mut ctx = setup().await;
    let _mock = ctx
        .server
        .mock("GET", "/api/incidentes/Incidentes/adjuntos/9")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body("%PDF-1.4")
        .create_async()
        .await;

    let service = IncidentServiceImpl::new(ctx.client.clone());
    let file = service.download_attachment(9).await.unwrap();

    assert_eq!(file.filename.as_deref(), Some(DEFAULT_ATTACHMENT_FILENAME));
    assert_eq!(file.bytes, b"%PDF-1.4".to_vec());
}

#[tokio::test]
async fn test_users_by_role_path() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock(
            "GET",
            "/api/incidentes/Incidentes/usuarios-por-rol-temporal/Regente",
        )
        .with_status(200)
        .with_body(r#"[{"id_usuario": 7, "nombre": "Jorge"}]"#)
        .create_async()
        .await;

    let service = IncidentCatalogServiceImpl::new(ctx.client.clone());
    let users = service.users_by_role("Regente").await.unwrap();

    mock.assert_async().await;
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_director_permission() {
    let mut ctx = setup().await;
    let _mock = ctx
        .server
        .mock("GET", "/api/incidentes/Incidentes/permisos/director")
        .with_status(200)
        .with_body(r#"{"isDirector": true}"#)
        .create_async()
        .await;

    let service = IncidentCatalogServiceImpl::new(ctx.client.clone());
    assert!(service.director_permission().await.unwrap().is_director);
}

#[tokio::test]
async fn test_incident_store_reload_keeps_cache_on_failure() {
    let mut ctx = setup().await;
    let ok = ctx
        .server
        .mock("GET", "/api/incidentes/Incidentes/incidentes")
        .with_status(200)
        .with_body(incidents_body())
        .expect(1)
        .create_async()
        .await;

    let service = IncidentServiceImpl::new(ctx.client.clone());
    let store = IncidentStore::new();
    let mut rx = store.subscribe();

    store.reload(&service).await;
    ok.assert_async().await;
    assert!(rx.has_changed().unwrap());
    assert_eq!(store.incidents().len(), 2);
    rx.borrow_and_update();

    ok.remove_async().await;
    let _failing = ctx
        .server
        .mock("GET", "/api/incidentes/Incidentes/incidentes")
        .with_status(500)
        .create_async()
        .await;

    store.reload(&service).await;
    assert_eq!(store.incidents().len(), 2);
    assert!(!rx.has_changed().unwrap());
}
