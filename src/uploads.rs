use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

use crate::models::renewal::UploadedDocument;

/// Directory holding documents submitted with renewal requests.
///
/// Files keep their original name, so a later upload with the same name
/// replaces the earlier one.
#[derive(Clone, Debug)]
pub struct UploadStore {
    path: PathBuf,
}

impl UploadStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn ensure_exists(&self) -> Result<()> {
        fs::create_dir_all(&self.path)
            .await
            .with_context(|| format!("Failed to create upload dir {}", self.path.display()))?;
        Ok(())
    }

    /// Write the document and return the path recorded on the request row.
    pub async fn save(&self, document: &UploadedDocument) -> Result<String> {
        let file_name = stored_file_name(&document.file_name)
            .ok_or_else(|| anyhow::anyhow!("Invalid upload file name: {:?}", document.file_name))?;

        self.ensure_exists().await?;

        let target = self.path.join(file_name);
        if fs::try_exists(&target).await.unwrap_or(false) {
            debug!("Overwriting existing upload {:?}", target);
        }

        fs::write(&target, &document.bytes)
            .await
            .with_context(|| format!("Failed to write upload {}", target.display()))?;

        info!(
            "Saved upload {:?} ({} bytes)",
            target,
            document.bytes.len()
        );

        Ok(target.to_string_lossy().into_owned())
    }
}

/// Final path component of a client-supplied file name.
///
/// Browsers on some platforms send the full local path, so both separators
/// are stripped. Returns `None` when nothing usable remains.
#[must_use]
pub fn stored_file_name(original: &str) -> Option<&str> {
    let name = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original)
        .trim();

    match name {
        "" | "." | ".." => None,
        name => Some(name),
    }
}
