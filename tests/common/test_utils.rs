use super::mocks::MockPipeline;
use axum::{Router, body::Body, http::Request, response::Response};
use score_predictor::server::{self, handlers::AppState, templates::Templates};
use score_predictor::Result;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Router wired to the given mock pipeline
pub fn create_test_app(pipeline: MockPipeline) -> Router {
    let state = AppState {
        pipeline: Arc::new(pipeline),
        templates: Arc::new(Templates::new().unwrap()),
    };
    server::router(state)
}

/// A complete, valid form body
pub fn valid_form_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("gender", "female"),
        ("ethnicity", "group B"),
        ("parental_level_of_education", "bachelor's degree"),
        ("lunch", "standard"),
        ("test_preparation_course", "none"),
        ("reading_score", "72"),
        ("writing_score", "74"),
    ]
}

/// Percent-encodes `fields` as an `application/x-www-form-urlencoded` body
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn form_request(fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predictdata")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(encode_form(fields)))
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}
