use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::ports::LlmClient;
use crate::presentation::handlers::generate::ErrorResponse;
use crate::presentation::state::AppState;

const PLACEHOLDER_CONTENT: &[u8] = b"This is a placeholder presentation.";

/// Serves the presentation file as an attachment. Real deck generation is not
/// implemented; a placeholder file is created on demand if none exists.
#[tracing::instrument(skip(state))]
pub async fn download_handler<L>(State(state): State<AppState<L>>) -> Response
where
    L: LlmClient + 'static,
{
    let path = &state.settings.presentation.placeholder_path;

    if tokio::fs::metadata(path).await.is_err() {
        if let Err(e) = tokio::fs::write(path, PLACEHOLDER_CONTENT).await {
            tracing::error!(path = %path.display(), error = %e, "Failed to create placeholder presentation");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Internal server error: {e}"),
                }),
            )
                .into_response();
        }
    }

    let bytes = match tokio::fs::read(path).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to read presentation file");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Internal server error: {e}"),
                }),
            )
                .into_response();
        }
    };

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "presentation.pptx".to_string());

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}
