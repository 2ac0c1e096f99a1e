//! Test fixtures for catalog loader testing

use crate::app::services::catalog_loader::CatalogSource;
use crate::app::services::catalog_parser::tests::{create_catalog_text, create_record_with_id};
use crate::{Error, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;


/// Catalog text with three valid records and one malformed record
pub fn create_sample_text() -> String {
    create_catalog_text(&[
        create_record_with_id(1, "T"),
        create_record_with_id(2, "P"),
        "2024,4,\"18:17:16\"".to_string(),
        create_record_with_id(3, "H2"),
    ])
}

/// Source that counts fetches and can be slowed down or made to fail
#[derive(Clone)]
pub struct CountingSource {
    content: Option<Vec<u8>>,
    delay: Duration,
    fetches: Arc<AtomicUsize>,
}

impl CountingSource {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: Some(content.into()),
            delay: Duration::ZERO,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Source whose fetch always fails
    pub fn unavailable() -> Self {
        Self {
            content: None,
            delay: Duration::ZERO,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl CatalogSource for CountingSource {
    fn name(&self) -> String {
        "counting".to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.content
            .clone()
            .ok_or_else(|| Error::resource_unavailable(self.name(), "connection refused"))
    }
}
