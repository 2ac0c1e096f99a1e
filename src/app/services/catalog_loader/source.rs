//! Catalog text sources
//!
//! A source yields the raw catalog bytes or a resource-level failure.

use crate::{Error, Result};
use std::future::Future;
use std::path::{Path, PathBuf};

/// Provider of the raw catalog text
pub trait CatalogSource: Send + Sync {
    /// Human-readable name used in logs and errors
    fn name(&self) -> String;

    /// Fetch the complete catalog content
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Catalog read from a file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::resource_unavailable(self.name(), e.to_string()))
    }
}

/// Catalog held in memory, mainly for embedding and tests
#[derive(Debug, Clone)]
pub struct InMemorySource {
    name: String,
    content: Vec<u8>,
}

impl InMemorySource {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl CatalogSource for InMemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(self.content.clone())
    }
}
