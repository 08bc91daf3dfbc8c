use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use deckhand::application::services::{
    DeckService, ExtractionService, InsightService, SummaryService,
};
use deckhand::infrastructure::extraction::CompositeExtractor;
use deckhand::infrastructure::llm::MockLlmClient;
use deckhand::presentation::config::{
    Environment, LlmSettings, PresentationSettings, ServerSettings, Settings, UploadSettings,
    MAX_UPLOAD_BYTES,
};
use deckhand::presentation::{create_router, AppState};

const BOUNDARY: &str = "deckhand-test-boundary";

const SUMMARY_REPLY: &str = "Sales are concentrated in hardware, software, and services.";
const INSIGHT_REPLY: &str =
    r#"{"labels": ["Hardware", "Software", "Services"], "data": [1200, 3400, 800]}"#;

fn test_settings(upload_root: &Path, placeholder: &Path) -> Settings {
    Settings {
        environment: Environment::Test,
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        llm: LlmSettings {
            api_key: "test-key".to_string(),
            model: "gemini-pro".to_string(),
        },
        uploads: UploadSettings {
            root: upload_root.to_path_buf(),
            max_body_bytes: MAX_UPLOAD_BYTES,
        },
        presentation: PresentationSettings {
            placeholder_path: placeholder.to_path_buf(),
        },
    }
}

fn test_router(llm_replies: Vec<String>, upload_root: &Path, placeholder: &Path) -> Router {
    let llm_client = Arc::new(MockLlmClient::with_replies(llm_replies));
    let extractor = Arc::new(CompositeExtractor::with_default_adapters());

    let state = AppState {
        extraction_service: Arc::new(ExtractionService::new(extractor)),
        summary_service: Arc::new(SummaryService::new(Arc::clone(&llm_client))),
        insight_service: Arc::new(InsightService::new(Arc::clone(&llm_client))),
        deck_service: Arc::new(DeckService::new()),
        settings: test_settings(upload_root, placeholder),
    };

    create_router(state)
}

struct MultipartBuilder {
    body: Vec<u8>,
}

impl MultipartBuilder {
    fn new() -> Self {
        Self { body: Vec::new() }
    }

    fn file(mut self, name: &str, filename: &str, content: &[u8]) -> Self {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        self.body
            .extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        self.body.extend_from_slice(content);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn text(mut self, name: &str, value: &str) -> Self {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn build(mut self) -> Body {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        Body::from(self.body)
    }
}

fn generate_request(body: Body) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(body)
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn dir_entry_count(path: &Path) -> usize {
    match std::fs::read_dir(path) {
        Ok(entries) => entries.count(),
        Err(_) => 0,
    }
}

const CSV_CONTENT: &[u8] = b"Category,Sales\nHardware,1200\nSoftware,3400\nServices,800\n";

#[tokio::test]
async fn missing_files_field_is_a_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(vec![], dir.path(), &dir.path().join("deck.pptx"));

    let body = MultipartBuilder::new().text("prompt", "summarize").build();
    let response = router.oneshot(generate_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "No files part in the request");
}

#[tokio::test]
async fn empty_filename_is_a_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(vec![], dir.path(), &dir.path().join("deck.pptx"));

    let body = MultipartBuilder::new().file("files", "", CSV_CONTENT).build();
    let response = router.oneshot(generate_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "No files uploaded");
}

#[tokio::test]
async fn names_that_sanitize_to_nothing_leave_no_persistable_files() {
    let dir = tempfile::tempdir().unwrap();
    let uploads = dir.path().join("uploads");
    let router = test_router(vec![], &uploads, &dir.path().join("deck.pptx"));

    // "..." survives the first-filename check but sanitizes to an empty
    // name, so nothing reaches the staging directory.
    let body = MultipartBuilder::new()
        .file("files", "...", CSV_CONTENT)
        .build();
    let response = router.oneshot(generate_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "No valid files were uploaded");

    assert_eq!(dir_entry_count(&uploads), 0);
}

#[tokio::test]
async fn disallowed_extension_rejects_the_whole_batch() {
    let dir = tempfile::tempdir().unwrap();
    let uploads = dir.path().join("uploads");
    let router = test_router(vec![], &uploads, &dir.path().join("deck.pptx"));

    let body = MultipartBuilder::new()
        .file("files", "report.pdf", b"%PDF-1.4 junk")
        .file("files", "notes.docx", b"not allowed")
        .build();
    let response = router.oneshot(generate_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "File type not allowed: notes.docx");

    // Nothing from the batch survives the response, including the valid file.
    assert_eq!(dir_entry_count(&uploads), 0);
}

#[tokio::test]
async fn csv_upload_produces_summary_and_insights() {
    let dir = tempfile::tempdir().unwrap();
    let uploads = dir.path().join("uploads");
    let router = test_router(
        vec![SUMMARY_REPLY.to_string(), INSIGHT_REPLY.to_string()],
        &uploads,
        &dir.path().join("deck.pptx"),
    );

    let body = MultipartBuilder::new()
        .file("files", "sales.csv", CSV_CONTENT)
        .text("prompt", "summarize sales")
        .build();
    let response = router.oneshot(generate_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;

    assert_eq!(json["summary"], SUMMARY_REPLY);
    assert_eq!(json["download_link"], "/api/download/presentation");
    assert!(json["highlights"].as_array().unwrap().is_empty());
    assert!(json["slides"].as_array().unwrap().is_empty());

    let labels = json["insights"]["labels"].as_array().unwrap();
    assert!(labels.len() <= 5);
    assert_eq!(labels[0], "Hardware");

    let dataset = &json["insights"]["datasets"][0];
    let data = dataset["data"].as_array().unwrap();
    let colors = dataset["backgroundColor"].as_array().unwrap();
    assert_eq!(colors.len(), data.len().min(5));

    // Cleanup invariant: no uploaded file remains on disk.
    assert_eq!(dir_entry_count(&uploads), 0);
}

#[tokio::test]
async fn prose_insight_reply_yields_canonical_empty_payload() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(
        vec![
            SUMMARY_REPLY.to_string(),
            "Sorry, I can only answer in prose today.".to_string(),
        ],
        dir.path(),
        &dir.path().join("deck.pptx"),
    );

    let body = MultipartBuilder::new()
        .file("files", "sales.csv", CSV_CONTENT)
        .build();
    let response = router.oneshot(generate_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;

    assert!(json["insights"]["labels"].as_array().unwrap().is_empty());
    let dataset = &json["insights"]["datasets"][0];
    assert!(dataset["data"].as_array().unwrap().is_empty());
    assert!(dataset["backgroundColor"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn palette_caps_at_five_colors() {
    let dir = tempfile::tempdir().unwrap();
    let seven_series = r#"{"labels": ["a","b","c","d","e","f","g"], "data": [1,2,3,4,5,6,7]}"#;
    let router = test_router(
        vec![SUMMARY_REPLY.to_string(), seven_series.to_string()],
        dir.path(),
        &dir.path().join("deck.pptx"),
    );

    let body = MultipartBuilder::new()
        .file("files", "sales.csv", CSV_CONTENT)
        .build();
    let response = router.oneshot(generate_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;

    let dataset = &json["insights"]["datasets"][0];
    assert_eq!(dataset["data"].as_array().unwrap().len(), 7);
    assert_eq!(dataset["backgroundColor"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn unparseable_documents_are_an_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    let uploads = dir.path().join("uploads");
    let router = test_router(vec![], &uploads, &dir.path().join("deck.pptx"));

    // Allowed extension, but the bytes are not a PDF: extraction skips it
    // silently and the combined content comes back empty.
    let body = MultipartBuilder::new()
        .file("files", "report.pdf", b"definitely not a pdf")
        .build();
    let response = router.oneshot(generate_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Failed to parse document contents");

    assert_eq!(dir_entry_count(&uploads), 0);
}

#[tokio::test]
async fn mixed_batch_skips_broken_file_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let uploads = dir.path().join("uploads");
    let router = test_router(
        vec![SUMMARY_REPLY.to_string(), INSIGHT_REPLY.to_string()],
        &uploads,
        &dir.path().join("deck.pptx"),
    );

    let body = MultipartBuilder::new()
        .file("files", "broken.pdf", b"garbage bytes")
        .file("files", "sales.csv", CSV_CONTENT)
        .build();
    let response = router.oneshot(generate_request(body)).await.unwrap();

    // Per-file extraction failure is invisible: the CSV alone carries the batch.
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["summary"], SUMMARY_REPLY);

    assert_eq!(dir_entry_count(&uploads), 0);
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(vec![], dir.path(), &dir.path().join("deck.pptx"));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn download_creates_placeholder_on_demand() {
    let dir = tempfile::tempdir().unwrap();
    let placeholder = dir.path().join("sample_presentation.pptx");
    let router = test_router(vec![], dir.path(), &placeholder);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/download/presentation")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    assert!(placeholder.exists());

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(!bytes.is_empty());
}
