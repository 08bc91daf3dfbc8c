use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::application::ports::LlmClient;
use crate::application::services::StagedUpload;
use crate::domain::{sanitize_filename, DocumentKind, InsightPayload, UploadedDocument};
use crate::infrastructure::storage::UploadStaging;
use crate::presentation::state::AppState;

pub const DOWNLOAD_LINK: &str = "/api/download/presentation";

#[derive(Serialize)]
pub struct GenerateResponse {
    pub summary: String,
    pub highlights: Vec<String>,
    pub slides: Vec<crate::domain::Slide>,
    pub insights: InsightPayload,
    pub download_link: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

struct IncomingFile {
    filename: String,
    data: Bytes,
}

/// Upload-to-insight pipeline: save uploads, extract, summarize, derive
/// insights, build the presentation payload, respond. The staging directory
/// is removed on every exit path once anything has been persisted.
#[tracing::instrument(skip(state, multipart))]
pub async fn generate_handler<L>(
    State(state): State<AppState<L>>,
    multipart: Multipart,
) -> Response
where
    L: LlmClient + 'static,
{
    let (files, prompt) = match receive_form(multipart).await {
        Ok(parts) => parts,
        Err(e) => return e.into_response(),
    };

    let staging = match UploadStaging::create(&state.settings.uploads.root) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Could not create staging directory");
            return ApiError::Internal(format!("Internal server error: {e}")).into_response();
        }
    };

    let outcome = run_pipeline(&state, &staging, &files, &prompt).await;

    staging.cleanup();

    match outcome {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Receiving and first-stage validation: the multipart form must carry a
/// `files` field with at least one named file. An optional `prompt` text
/// field is passed through verbatim.
async fn receive_form(mut multipart: Multipart) -> Result<(Vec<IncomingFile>, String), ApiError> {
    let mut files = Vec::new();
    let mut prompt = String::new();
    let mut saw_files_field = false;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return Err(ApiError::BadRequest(format!(
                    "Failed to read multipart body: {e}"
                )));
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("files") => {
                saw_files_field = true;
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read file data: {e}"))
                })?;
                files.push(IncomingFile { filename, data });
            }
            Some("prompt") => {
                prompt = field.text().await.unwrap_or_default();
            }
            _ => {}
        }
    }

    if !saw_files_field {
        return Err(ApiError::BadRequest(
            "No files part in the request".to_string(),
        ));
    }

    if files.is_empty() || files[0].filename.is_empty() {
        return Err(ApiError::BadRequest("No files uploaded".to_string()));
    }

    Ok((files, prompt))
}

async fn run_pipeline<L>(
    state: &AppState<L>,
    staging: &UploadStaging,
    files: &[IncomingFile],
    prompt: &str,
) -> Result<GenerateResponse, ApiError>
where
    L: LlmClient,
{
    let staged = save_uploads(staging, files).await?;

    let raw_content = state.extraction_service.extract_all(&staged).await;
    if raw_content.is_empty() {
        return Err(ApiError::Internal(
            "Failed to parse document contents".to_string(),
        ));
    }

    let summary = state
        .summary_service
        .summarize(&raw_content, prompt)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Summary generation failed");
            ApiError::Internal(format!("Internal server error: {e}"))
        })?;

    let insights = state.insight_service.derive(&summary).await.map_err(|e| {
        tracing::error!(error = %e, "Insight derivation failed");
        ApiError::Internal(format!("Internal server error: {e}"))
    })?;

    let deck = state.deck_service.build(&summary);

    tracing::info!(
        files = staged.len(),
        labels = insights.labels.len(),
        "Generation pipeline complete"
    );

    Ok(GenerateResponse {
        summary: deck.summary,
        highlights: deck.highlights,
        slides: deck.slides,
        insights,
        download_link: DOWNLOAD_LINK.to_string(),
    })
}

/// Saving: sanitize each filename, reject the whole batch on the first
/// disallowed extension (fail-fast, unlike extraction-time skips), and skip
/// names that sanitize to nothing.
async fn save_uploads(
    staging: &UploadStaging,
    files: &[IncomingFile],
) -> Result<Vec<StagedUpload>, ApiError> {
    let mut staged = Vec::with_capacity(files.len());

    for file in files {
        let filename = sanitize_filename(&file.filename);
        if filename.is_empty() {
            continue;
        }

        let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
            ApiError::BadRequest(format!("File type not allowed: {filename}"))
        })?;

        let path = staging.save(&filename, &file.data).await.map_err(|e| {
            tracing::error!(filename = %filename, error = %e, "Failed to persist upload");
            ApiError::Internal(format!("Internal server error: {e}"))
        })?;

        staged.push(StagedUpload {
            document: UploadedDocument::new(filename, kind, file.data.len() as u64),
            path,
        });
    }

    if staged.is_empty() {
        return Err(ApiError::BadRequest(
            "No valid files were uploaded".to_string(),
        ));
    }

    Ok(staged)
}
