//! Log directory creation for experiment runs

use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LogDirError {
    #[error("Failed to create log directory: {0}")]
    Create(#[from] std::io::Error),
}

/// Create a run's log directory, parents included. Idempotent: an existing
/// directory is not an error.
pub async fn create_log_dir(path: &Path) -> Result<(), LogDirError> {
    debug!("Creating log directory {}", path.display());
    fs::create_dir_all(path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_nested_directories() {
        let base = tempfile::tempdir().unwrap();
        let dir = base.path().join("runs").join("run1");

        create_log_dir(&dir).await.unwrap();
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn creating_twice_succeeds() {
        let base = tempfile::tempdir().unwrap();
        let dir = base.path().join("run1");

        create_log_dir(&dir).await.unwrap();
        create_log_dir(&dir).await.unwrap();
        assert!(dir.is_dir());
    }
}
