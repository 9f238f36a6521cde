use super::common::setup;
use brisa_client::prelude::*;
use mockito::Matcher;
use serde_json::{Value, json};

fn bulk_request_json(estado: &str) -> Value {
    json!({
        "id_solicitud": 15,
        "id_solicitante": 2,
        "id_motivo": 1,
        "fecha_hora_salida": "2025-05-10T11:00:00",
        "foto_evidencia": "https://files/evidencia.jpg",
        "fecha_creacion": "2025-05-10T08:00:00",
        "estado": estado,
        "cantidad_estudiantes": 25
    })
}

fn request_json(estado: &str) -> Value {
    json!({
        "id_solicitud": 8,
        "id_apoderado": 3,
        "id_estudiante": 31,
        "id_motivo": 1,
        "fecha_hora_salida": "2025-05-10T11:00:00",
        "estado": estado,
        "fecha_creacion": "2025-05-10T08:00:00"
    })
}

#[tokio::test]
async fn test_list_requests_reads_named_field() {
    let mut ctx = setup().await;
    let _mock = ctx
        .server
        .mock("GET", "/api/retiros-tempranos/solicitudes?skip=0&limit=10")
        .with_status(200)
        .with_body(json!({"total": 1, "solicitudes": [request_json("recibida")]}).to_string())
        .create_async()
        .await;

    let service = WithdrawalServiceImpl::new(ctx.client.clone());
    let requests = service.list_requests(&Pagination::new(0, 10)).await.unwrap();

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].estado, RequestStatus::Recibida);
}

#[tokio::test]
async fn test_create_request_posts_with_trailing_slash() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("POST", "/api/retiros-tempranos/solicitudes/")
        .match_body(Matcher::Json(json!({
            "id_estudiante": 31,
            "id_motivo": 1,
            "fecha_hora_salida": "2025-05-10T11:00:00"
        })))
        .with_status(201)
        .with_body(request_json("recibida").to_string())
        .create_async()
        .await;

    let service = WithdrawalServiceImpl::new(ctx.client.clone());
    let data = WithdrawalRequestCreate {
        id_estudiante: 31,
        id_motivo: 1,
        fecha_hora_salida: "2025-05-10T11:00:00".to_string(),
        ..Default::default()
    };
    let created = service.create_request(&data).await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.id_solicitud, 8);
}

#[tokio::test]
async fn test_forward_request_sends_note() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("PUT", "/api/retiros-tempranos/solicitudes/8/derivar")
        .match_body(Matcher::Json(json!({"observacion_derivacion": "Revisar hoy"})))
        .with_status(200)
        .with_body(request_json("derivada").to_string())
        .create_async()
        .await;

    let service = WithdrawalServiceImpl::new(ctx.client.clone());
    let forwarded = service.forward_request(8, Some("Revisar hoy")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(forwarded.estado, RequestStatus::Derivada);
}

#[tokio::test]
async fn test_forward_without_note_sends_empty_object() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("PUT", "/api/retiros-tempranos/solicitudes-masivas/15/derivar")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_body(bulk_request_json("derivada").to_string())
        .create_async()
        .await;

    let service = WithdrawalServiceImpl::new(ctx.client.clone());
    let forwarded = service.forward_bulk_request(15, None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(forwarded.cantidad_estudiantes, Some(25));
}

#[tokio::test]
async fn test_approve_request_decision_body() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("PUT", "/api/autorizaciones-retiro/8/decision")
        .match_body(Matcher::Json(json!({"aprobado": true, "observacion": "Con tutor"})))
        .with_status(200)
        .with_body(r#"{"id_autorizacion": 4, "decision": "aprobado"}"#)
        .create_async()
        .await;

    let service = WithdrawalServiceImpl::new(ctx.client.clone());
    let result = service
        .approve_request(
            8,
            ApproveRequest {
                observacion: Some("Con tutor".to_string()),
            },
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result["decision"], "aprobado");
}

#[tokio::test]
async fn test_reject_bulk_request_decision_body() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("PUT", "/api/autorizaciones-retiro/masiva/15/decision")
        .match_body(Matcher::Json(json!({"aprobado": false, "justificacion": "Sin evidencia"})))
        .with_status(200)
        .with_body(bulk_request_json("rechazada").to_string())
        .create_async()
        .await;

    let service = WithdrawalServiceImpl::new(ctx.client.clone());
    let rejected = service
        .reject_bulk_request(
            15,
            RejectRequest {
                justificacion: "Sin evidencia".to_string(),
            },
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(rejected.estado, RequestStatus::Rechazada);
}

#[tokio::test]
async fn test_cancel_request_body() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("PUT", "/api/retiros-tempranos/solicitudes/8/cancelar")
        .match_body(Matcher::Json(json!({"motivo_cancelacion": "Ya no es necesario"})))
        .with_status(200)
        .with_body(request_json("cancelada").to_string())
        .create_async()
        .await;

    let service = WithdrawalServiceImpl::new(ctx.client.clone());
    let cancelled = service
        .cancel_request(
            8,
            &CancelRequest {
                motivo_cancelacion: "Ya no es necesario".to_string(),
            },
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(cancelled.estado, RequestStatus::Cancelada);
}

#[tokio::test]
async fn test_register_bulk_exit_body() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("POST", "/api/retiros-tempranos/registros-salida/masivo")
        .match_body(Matcher::Json(json!({
            "id_solicitud_masiva": 15,
            "observaciones": "Salida al museo"
        })))
        .with_status(201)
        .with_body(
            json!([
                {"id_registro": 1, "id_solicitud_masiva": 15, "id_estudiante": 31, "tipo_registro": "masivo", "fecha_hora_salida_real": "2025-05-10T11:05:00"},
                {"id_registro": 2, "id_solicitud_masiva": 15, "id_estudiante": 32, "tipo_registro": "masivo", "fecha_hora_salida_real": "2025-05-10T11:05:00"}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let service = WithdrawalServiceImpl::new(ctx.client.clone());
    let exits = service
        .register_bulk_exit(
            15,
            ExitRecordCreate {
                responsable_retiro: None,
                observaciones: Some("Salida al museo".to_string()),
            },
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(exits.len(), 2);
    assert!(exits.iter().all(|e| e.tipo_registro == "masivo"));
}

#[tokio::test]
async fn test_create_bulk_request_body() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("POST", "/api/retiros-tempranos/solicitudes-masivas/")
        .match_body(Matcher::PartialJson(json!({
            "foto_evidencia": "https://files/evidencia.jpg",
            "estudiantes": [
                {"id_estudiante": 31},
                {"id_estudiante": 32, "observacion_individual": "Alergia"}
            ]
        })))
        .with_status(201)
        .with_body(bulk_request_json("recibida").to_string())
        .create_async()
        .await;

    let service = WithdrawalServiceImpl::new(ctx.client.clone());
    let data = BulkWithdrawalRequestCreate {
        id_motivo: 1,
        fecha_hora_salida: "2025-05-10T11:00:00".to_string(),
        foto_evidencia: "https://files/evidencia.jpg".to_string(),
        estudiantes: vec![
            BulkStudentDetail {
                id_estudiante: 31,
                observacion_individual: None,
            },
            BulkStudentDetail {
                id_estudiante: 32,
                observacion_individual: Some("Alergia".to_string()),
            },
        ],
        ..Default::default()
    };
    let created = service.create_bulk_request(&data).await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.id_solicitud, 15);
}

#[tokio::test]
async fn test_delete_motive_accepts_no_content() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("DELETE", "/api/motivos-retiro/3")
        .with_status(204)
        .create_async()
        .await;

    let service = WithdrawalServiceImpl::new(ctx.client.clone());
    service.delete_motive(3).await.unwrap();
    mock.assert_async().await;
}
