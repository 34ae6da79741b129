use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

use crate::core::errors::CompileError;

/// A submitted program written to a uniquely named file so the external
/// compiler can read it. The file lives exactly as long as this value: the
/// orchestration path removes it with [`SourceFile::cleanup`], and `Drop`
/// removes it on any path that bails out early.
#[derive(Debug)]
pub struct SourceFile {
    path: PathBuf,
    removed: bool,
}

impl SourceFile {
    pub async fn materialize(scratch_dir: &Path, source: &str) -> Result<Self, CompileError> {
        fs::create_dir_all(scratch_dir)
            .await
            .map_err(|e| CompileError::Internal {
                msg: format!("failed to create scratch directory: {e}"),
            })?;

        let path = scratch_dir.join(format!("{}.code", Uuid::new_v4()));
        fs::write(&path, source)
            .await
            .map_err(|e| CompileError::Internal {
                msg: format!("failed to write source file: {e}"),
            })?;

        Ok(Self {
            path,
            removed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the file. Deletion failure is logged, not surfaced: the
    /// compile result is already decided by the time cleanup runs.
    pub async fn cleanup(mut self) {
        if let Err(e) = fs::remove_file(&self.path).await {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to remove source file");
        }
        self.removed = true;
    }
}

impl Drop for SourceFile {
    fn drop(&mut self) {
        if !self.removed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn materialize_writes_full_source_text() {
        let dir = tempfile::tempdir().unwrap();
        let source = "nexus {\n    broadcast 1;\n}";

        let file = SourceFile::materialize(dir.path(), source).await.unwrap();
        let written = fs::read_to_string(file.path()).await.unwrap();

        assert_eq!(written, source);
        file.cleanup().await;
    }

    #[tokio::test]
    async fn cleanup_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();

        let file = SourceFile::materialize(dir.path(), "nexus {}").await.unwrap();
        let path = file.path().to_path_buf();
        assert!(path.exists());

        file.cleanup().await;
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn drop_removes_the_file_on_early_exit() {
        let dir = tempfile::tempdir().unwrap();

        let path = {
            let file = SourceFile::materialize(dir.path(), "nexus {}").await.unwrap();
            file.path().to_path_buf()
        };

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn concurrent_requests_get_distinct_paths() {
        let dir = tempfile::tempdir().unwrap();

        let first = SourceFile::materialize(dir.path(), "nexus {}").await.unwrap();
        let second = SourceFile::materialize(dir.path(), "nexus {}").await.unwrap();

        assert_ne!(first.path(), second.path());
        first.cleanup().await;
        second.cleanup().await;
    }
}
