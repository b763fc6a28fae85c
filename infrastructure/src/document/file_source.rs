//! Local file system document source
//!
//! Reads the source text of an exam from a single text file, or from every
//! `.txt`/`.md` file directly inside a directory (sorted by name, joined by a
//! blank line).

use async_trait::async_trait;
use exam_application::{DocumentError, DocumentSource};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const TEXT_EXTENSIONS: [&str; 3] = ["txt", "md", "markdown"];

/// Document source that reads from the local file system.
pub struct FileDocumentSource {
    path: PathBuf,
    name: String,
}

impl FileDocumentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self, path: &Path) -> Result<String, DocumentError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DocumentError::Unreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }

    async fn read_dir(&self) -> Result<String, DocumentError> {
        let unreadable = |e: std::io::Error| DocumentError::Unreadable {
            path: self.name.clone(),
            message: e.to_string(),
        };

        let mut entries = tokio::fs::read_dir(&self.path).await.map_err(unreadable)?;
        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(unreadable)? {
            let path = entry.path();
            if path.is_file() && is_text_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        debug!(files = files.len(), dir = %self.name, "Reading text files from directory");

        let mut parts = Vec::with_capacity(files.len());
        for file in &files {
            parts.push(self.read_file(file).await?);
        }
        Ok(parts.join("\n\n"))
    }
}

#[async_trait]
impl DocumentSource for FileDocumentSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read(&self) -> Result<String, DocumentError> {
        if !self.path.exists() {
            return Err(DocumentError::NotFound(self.name.clone()));
        }

        let content = if self.path.is_dir() {
            self.read_dir().await?
        } else {
            self.read_file(&self.path).await?
        };

        if content.trim().is_empty() {
            return Err(DocumentError::Empty(self.name.clone()));
        }

        info!(source = %self.name, bytes = content.len(), "Loaded source document");
        Ok(content)
    }
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TEXT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
