use brisa_client::model::download::filename_from_content_disposition;
use brisa_client::model::http::{QueryParams, build_query, join_url, normalize_base_url};
use brisa_client::model::upload::UploadFile;
use brisa_client::presentation::common::Pagination;

#[test]
fn test_normalized_base_and_path_never_double_separators() {
    for base in ["http://h/api", "http://h/api/", "http://h/api///"] {
        let base = normalize_base_url(base);
        for path in ["estudiantes/1", "/estudiantes/1"] {
            assert_eq!(join_url(&base, path), "http://h/api/estudiantes/1");
        }
    }
}

#[test]
fn test_absolute_path_is_untouched() {
    let base = normalize_base_url("http://h/api/");
    assert_eq!(
        join_url(&base, "https://files.example.com/a.pdf"),
        "https://files.example.com/a.pdf"
    );
}

#[test]
fn test_pagination_query_keeps_order() {
    let query = QueryParams::from(&Pagination::new(20, 10));
    assert_eq!(build_query(&query), "?skip=20&limit=10");
}

#[test]
fn test_attachment_filename_with_spaces() {
    assert_eq!(
        filename_from_content_disposition("attachment; filename=\"informe final.pdf\""),
        Some("informe final.pdf".to_string())
    );
}

#[tokio::test]
async fn test_upload_from_path_guesses_mime() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("estudiantes.csv");
    std::fs::write(&path, "nombres,apellido_paterno\nAna,Quispe\n").unwrap();

    let upload = UploadFile::from_path(&path).await.unwrap();
    assert_eq!(upload.file_name, "estudiantes.csv");
    assert_eq!(upload.mime, "text/csv");
    assert!(!upload.bytes.is_empty());
}

#[test]
fn test_upload_from_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = tokio_test::block_on(UploadFile::from_path(dir.path().join("missing.xlsx")));
    assert!(matches!(result, Err(brisa_client::error::AppError::Io(_))));
}
