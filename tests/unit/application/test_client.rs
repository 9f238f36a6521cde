use super::common::{TEST_TOKEN, bearer, setup, setup_with_token};
use brisa_client::prelude::*;
use mockito::Matcher;
use serde_json::{Value, json};

#[tokio::test]
async fn test_get_sends_bearer_token_and_json_content_type() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("GET", "/api/cursos/3")
        .match_header("authorization", bearer().as_str())
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id_curso": 3, "nombre": "1ro A", "gestion": "2025", "nivel_educativo": "Primaria"}"#)
        .create_async()
        .await;

    let course: Course = ctx.client.get("cursos/3").await.unwrap();

    mock.assert_async().await;
    assert_eq!(course.id, 3);
    assert_eq!(course.nombre, "1ro A");
}

#[tokio::test]
async fn test_request_without_token_has_no_authorization_header() {
    let mut ctx = setup_with_token(None).await;
    let mock = ctx
        .server
        .mock("GET", "/api/estudiantes/1")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"id": 1, "nombres": "Ana"}"#)
        .create_async()
        .await;

    let student: Student = ctx.client.get("/estudiantes/1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(student.id, 1);
}

#[tokio::test]
async fn test_post_serializes_json_body() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("POST", "/api/asignaciones/asignar")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"id_estudiante": 4, "id_curso": 9})))
        .with_status(201)
        .with_body(r#"{"estudiante_id": 4, "curso_id": 9, "fecha_inscripcion": "2025-02-03"}"#)
        .create_async()
        .await;

    let body = AssignStudentRequest {
        id_estudiante: 4,
        id_curso: 9,
    };
    let assignment: Assignment = ctx
        .client
        .post("/asignaciones/asignar", &body)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(assignment.curso_id, 9);
}

#[tokio::test]
async fn test_multipart_lets_transport_set_content_type() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("POST", "/api/estudiantes/importar")
        .match_header("authorization", bearer().as_str())
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::Regex("name=\"file\"".to_string()))
        .with_status(200)
        .with_body(r#"{"importados": 2}"#)
        .create_async()
        .await;

    let form = UploadFile::new("lista.csv", "text/csv", b"a,b\n".to_vec())
        .into_form("file")
        .unwrap();
    let result: Value = ctx
        .client
        .post_multipart("/estudiantes/importar", form)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result, json!({"importados": 2}));
}

#[tokio::test]
async fn test_no_content_is_not_parsed() {
    let mut ctx = setup().await;
    let _mock = ctx
        .server
        .mock("DELETE", "/api/cursos/7")
        .with_status(204)
        .create_async()
        .await;

    let response = ctx.client.delete("/cursos/7").await.unwrap();
    assert_eq!(response, ApiResponse::NoContent);
}

#[tokio::test]
async fn test_payload_expected_but_no_content() {
    let mut ctx = setup().await;
    let _mock = ctx
        .server
        .mock("GET", "/api/cursos/7")
        .with_status(204)
        .create_async()
        .await;

    let result = ctx.client.get::<Course>("/cursos/7").await;
    assert!(matches!(result, Err(AppError::NoContent)));
}

#[tokio::test]
async fn test_malformed_success_body_is_json_error() {
    let mut ctx = setup().await;
    let _mock = ctx
        .server
        .mock("GET", "/api/cursos/7")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let result = ctx.client.get::<Value>("/cursos/7").await;
    assert!(matches!(result, Err(AppError::Json(_))));
}

#[tokio::test]
async fn test_error_message_and_details_are_kept() {
    let mut ctx = setup().await;
    let _mock = ctx
        .server
        .mock("GET", "/api/estudiantes/99")
        .with_status(404)
        .with_body(r#"{"detail": "Estudiante no encontrado"}"#)
        .create_async()
        .await;

    let err = ctx.client.get::<Student>("/estudiantes/99").await.unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.status, StatusCode::NOT_FOUND);
    assert_eq!(api.message, "Estudiante no encontrado");
    assert_eq!(api.details, json!({"detail": "Estudiante no encontrado"}));
    assert!(!err.is_unauthorized());
    // Session untouched by non-401 failures
    assert_eq!(ctx.session.token().as_deref(), Some(TEST_TOKEN));
}

#[tokio::test]
async fn test_message_field_wins_over_detail() {
    let mut ctx = setup().await;
    let _mock = ctx
        .server
        .mock("POST", "/api/cursos/")
        .with_status(400)
        .with_body(r#"{"message": "Nombre duplicado", "detail": "otro"}"#)
        .create_async()
        .await;

    let err = ctx
        .client
        .post::<_, Value>("/cursos/", &json!({"nombre": "1ro A"}))
        .await
        .unwrap_err();
    assert_eq!(err.api_error().unwrap().message, "Nombre duplicado");
}

#[tokio::test]
async fn test_unparsable_error_body_uses_status_message() {
    let mut ctx = setup().await;
    let _mock = ctx
        .server
        .mock("GET", "/api/cursos/")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let err = ctx.client.get::<Value>("/cursos/").await.unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.message, "HTTP Error: 500");
    assert_eq!(api.details, json!({}));
}

#[tokio::test]
async fn test_validation_errors_are_decoded() {
    let mut ctx = setup().await;
    let _mock = ctx
        .server
        .mock("POST", "/api/asignaciones/asignar")
        .with_status(422)
        .with_body(
            r#"{"detail": [{"loc": ["body", "id_curso"], "msg": "field required", "type": "value_error.missing"}]}"#,
        )
        .create_async()
        .await;

    let err = ctx
        .client
        .post::<_, Value>("/asignaciones/asignar", &json!({"id_estudiante": 1}))
        .await
        .unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.message, "HTTP Error: 422");
    let errors = api.validation_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].msg, "field required");
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_redirects() {
    let mut ctx = setup().await;
    let _mock = ctx
        .server
        .mock("GET", "/api/estudiantes/1")
        .with_status(401)
        .with_body(r#"{"detail": "Token expirado"}"#)
        .create_async()
        .await;

    let err = ctx.client.get::<Student>("/estudiantes/1").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.api_error().unwrap().message, "Token expirado");
    assert_eq!(ctx.session.token(), None);
    assert_eq!(ctx.session.profile(), None);
    assert_eq!(ctx.redirect.locations(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_unauthorized_multipart_upload_ends_session() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("POST", "/api/estudiantes/importar")
        .match_header("authorization", bearer().as_str())
        .match_header("content-type", Matcher::Regex("multipart/form-data".to_string()))
        .with_status(401)
        .with_body(r#"{"detail": "No autenticado"}"#)
        .create_async()
        .await;

    let form = UploadFile::new("lista.csv", "text/csv", b"a,b\n".to_vec()).into_form("file").unwrap();
    let err = ctx
        .client
        .post_multipart::<Value>("/estudiantes/importar", form)
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(err.is_unauthorized());
    assert_eq!(ctx.session.token(), None);
    assert_eq!(ctx.session.profile(), None);
    assert_eq!(ctx.redirect.locations(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_unauthorized_put_ends_session() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("PUT", "/api/cursos/7")
        .match_body(Matcher::Json(json!({"nombre": "3ro C"})))
        .with_status(401)
        .with_body(r#"{"detail": "Token expirado"}"#)
        .create_async()
        .await;

    let err = ctx
        .client
        .put::<_, Value>("/cursos/7", &json!({"nombre": "3ro C"}))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(err.is_unauthorized());
    assert_eq!(ctx.session.token(), None);
    assert_eq!(ctx.session.profile(), None);
    assert_eq!(ctx.redirect.locations(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_unauthorized_delete_ends_session() {
    let mut ctx = setup().await;
    let _mock = ctx
        .server
        .mock("DELETE", "/api/cursos/7")
        .with_status(401)
        .create_async()
        .await;

    let err = ctx.client.delete("/cursos/7").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(ctx.session.token(), None);
    assert_eq!(ctx.session.profile(), None);
    assert_eq!(ctx.redirect.locations(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_download_returns_bytes_and_filename() {
    let mut ctx = setup().await;
    let mock = ctx
        .server
        .mock("GET", "/api/estudiantes/exportar/todos")
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_header(
            "content-type",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        )
        .with_header(
            "content-disposition",
            "attachment; filename=\"estudiantes.xlsx\"",
        )
        .with_body(vec![0x50, 0x4b, 0x03, 0x04])
        .create_async()
        .await;

    let file = ctx
        .client
        .download_file("/estudiantes/exportar/todos")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(file.bytes, vec![0x50, 0x4b, 0x03, 0x04]);
    assert_eq!(file.filename.as_deref(), Some("estudiantes.xlsx"));
    assert_eq!(
        file.content_type.as_deref(),
        Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
    );
}

#[tokio::test]
async fn test_download_failure_is_reported_with_status() {
    let mut ctx = setup().await;
    let _mock = ctx
        .server
        .mock("GET", "/api/estudiantes/plantilla/excel")
        .with_status(500)
        .create_async()
        .await;

    let err = ctx
        .client
        .download_file("/estudiantes/plantilla/excel")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Download(StatusCode::INTERNAL_SERVER_ERROR)));
    assert_eq!(ctx.session.token().as_deref(), Some(TEST_TOKEN));
}

#[tokio::test]
async fn test_unauthorized_download_ends_session() {
    let mut ctx = setup().await;
    let _mock = ctx
        .server
        .mock("GET", "/api/estudiantes/plantilla/excel")
        .with_status(401)
        .create_async()
        .await;

    let err = ctx
        .client
        .download_file("/estudiantes/plantilla/excel")
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!ctx.session.is_authenticated());
    assert_eq!(ctx.redirect.locations(), vec!["/login".to_string()]);
}
