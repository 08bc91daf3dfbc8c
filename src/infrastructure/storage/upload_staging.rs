use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Request-scoped staging area for uploads.
///
/// Each request gets its own directory under the configured upload root, so
/// two concurrent requests uploading identically named files never collide.
/// `cleanup` removes the whole directory and is called on every exit path;
/// the `TempDir` drop guard is a backstop for panics.
pub struct UploadStaging {
    dir: TempDir,
}

#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error("failed to create staging directory: {0}")]
    CreateFailed(std::io::Error),
    #[error("failed to persist upload: {0}")]
    SaveFailed(std::io::Error),
}

impl UploadStaging {
    pub fn create(upload_root: &Path) -> Result<Self, StagingError> {
        std::fs::create_dir_all(upload_root).map_err(StagingError::CreateFailed)?;
        let dir = TempDir::with_prefix_in("request-", upload_root)
            .map_err(StagingError::CreateFailed)?;
        Ok(Self { dir })
    }

    pub async fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf, StagingError> {
        let path = self.dir.path().join(filename);
        tokio::fs::write(&path, data)
            .await
            .map_err(StagingError::SaveFailed)?;
        Ok(path)
    }

    /// Deletes every persisted upload. Failures are logged, never escalated.
    pub fn cleanup(self) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            tracing::warn!(path = %path.display(), error = %e, "Failed to clean up staging directory");
        } else {
            tracing::debug!(path = %path.display(), "Staging directory removed");
        }
    }
}
