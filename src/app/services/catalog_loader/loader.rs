//! Catalog loader with an observable load status

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{OnceCell, watch};
use tracing::{debug, error, info, warn};

use super::source::CatalogSource;
use crate::app::services::catalog_parser::CatalogParser;
use crate::app::services::eclipse_catalog::Catalog;
use crate::config::Config;
use crate::{Error, Result};

/// Resource-level reason a load failed
///
/// Cloneable so it can be published to every observer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadFailure {
    #[error("Catalog resource '{source_name}' unavailable: {reason}")]
    ResourceUnavailable { source_name: String, reason: String },

    #[error("Loading catalog '{source_name}' timed out after {seconds}s")]
    TimedOut { source_name: String, seconds: u64 },
}

impl From<LoadFailure> for Error {
    fn from(failure: LoadFailure) -> Self {
        match failure {
            LoadFailure::ResourceUnavailable {
                source_name,
                reason,
            } => Error::resource_unavailable(source_name, reason),
            LoadFailure::TimedOut {
                source_name,
                seconds,
            } => Error::load_timeout(source_name, seconds),
        }
    }
}

/// Lifecycle of a catalog load
///
/// Starts at `Loading` and transitions exactly once to `Ready` or `Failed`.
#[derive(Debug, Clone)]
pub enum LoadStatus {
    Loading,
    Ready(Arc<Catalog>),
    Failed(LoadFailure),
}

impl LoadStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadStatus::Ready(_))
    }

    /// Whether the status has reached a terminal state
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadStatus::Loading)
    }

    /// The published catalog, once ready
    pub fn catalog(&self) -> Option<Arc<Catalog>> {
        match self {
            LoadStatus::Ready(catalog) => Some(Arc::clone(catalog)),
            LoadStatus::Loading | LoadStatus::Failed(_) => None,
        }
    }
}

/// Loads a catalog from a source exactly once
///
/// `load()` may be called from any number of tasks; the first call performs
/// the fetch and decode, every other call waits for and returns that result.
pub struct CatalogLoader<S> {
    source: S,
    parser: CatalogParser,
    timeout: Option<Duration>,
    outcome: OnceCell<std::result::Result<Arc<Catalog>, LoadFailure>>,
    status_tx: watch::Sender<LoadStatus>,
}

impl<S: CatalogSource> CatalogLoader<S> {
    /// Create a loader with default parser settings and no deadline
    pub fn new(source: S) -> Self {
        let (status_tx, _) = watch::channel(LoadStatus::Loading);
        Self {
            source,
            parser: CatalogParser::new(),
            timeout: None,
            outcome: OnceCell::new(),
            status_tx,
        }
    }

    /// Create a loader configured from application settings
    pub fn with_config(source: S, config: &Config) -> Self {
        Self::new(source)
            .with_timeout(config.load_timeout())
            .with_parser(
                CatalogParser::new().with_max_reported_errors(config.loader.max_reported_errors),
            )
    }

    /// Set the load deadline, `None` waits indefinitely
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_parser(mut self, parser: CatalogParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the catalog, or return the result of the load already performed
    pub async fn load(&self) -> Result<Arc<Catalog>> {
        let outcome = self
            .outcome
            .get_or_init(|| async {
                let outcome = self.run().await;
                self.publish(&outcome);
                outcome
            })
            .await;

        outcome.clone().map_err(Error::from)
    }

    /// Current status snapshot
    pub fn status(&self) -> LoadStatus {
        self.status_tx.borrow().clone()
    }

    /// Subscribe to status changes
    pub fn subscribe(&self) -> watch::Receiver<LoadStatus> {
        self.status_tx.subscribe()
    }

    /// Wait until the status leaves `Loading`
    ///
    /// Does not start a load by itself.
    pub async fn wait_until_settled(&self) -> Result<LoadStatus> {
        let mut status_rx = self.subscribe();
        let status = status_rx
            .wait_for(LoadStatus::is_settled)
            .await
            .map_err(|_| Error::processing_interrupted("Catalog loader dropped"))?;
        Ok(status.clone())
    }

    /// The catalog, if the load has completed successfully
    pub fn catalog(&self) -> Option<Arc<Catalog>> {
        self.status().catalog()
    }

    async fn run(&self) -> std::result::Result<Arc<Catalog>, LoadFailure> {
        let source_name = self.source.name();
        info!("Loading eclipse catalog from {}", source_name);
        let start = Instant::now();

        let catalog = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.fetch_and_decode(&source_name))
                .await
                .map_err(|_| {
                    warn!(
                        "Catalog load from {} exceeded {}s deadline",
                        source_name,
                        timeout.as_secs()
                    );
                    LoadFailure::TimedOut {
                        source_name: source_name.clone(),
                        seconds: timeout.as_secs(),
                    }
                })??,
            None => self.fetch_and_decode(&source_name).await?,
        };

        let catalog = catalog.with_load_duration(start.elapsed());
        info!("{}", catalog.metadata().summary());
        if !catalog.stats().is_successful() && catalog.stats().total_records > 0 {
            warn!("Low decode rate: {}", catalog.stats().summary());
        }

        Ok(Arc::new(catalog))
    }

    async fn fetch_and_decode(
        &self,
        source_name: &str,
    ) -> std::result::Result<Catalog, LoadFailure> {
        let bytes = self.source.fetch().await.map_err(|e| {
            let reason = match e {
                Error::ResourceUnavailable { reason, .. } => reason,
                other => other.to_string(),
            };
            LoadFailure::ResourceUnavailable {
                source_name: source_name.to_string(),
                reason,
            }
        })?;
        debug!("Fetched {} bytes from {}", bytes.len(), source_name);

        let content = String::from_utf8(bytes).map_err(|e| LoadFailure::ResourceUnavailable {
            source_name: source_name.to_string(),
            reason: format!("Catalog is not valid UTF-8 text: {}", e),
        })?;

        if content.trim().is_empty() {
            return Err(LoadFailure::ResourceUnavailable {
                source_name: source_name.to_string(),
                reason: "Catalog text is empty".to_string(),
            });
        }

        // Decode off the async workers so the deadline can fire mid-decode
        let parser = self.parser.clone();
        let name = source_name.to_string();
        tokio::task::spawn_blocking(move || Catalog::from_text(name, &content, &parser))
            .await
            .map_err(|e| LoadFailure::ResourceUnavailable {
                source_name: source_name.to_string(),
                reason: format!("Decode task failed: {}", e),
            })
    }

    fn publish(&self, outcome: &std::result::Result<Arc<Catalog>, LoadFailure>) {
        let status = match outcome {
            Ok(catalog) => LoadStatus::Ready(Arc::clone(catalog)),
            Err(failure) => {
                error!("Catalog load failed: {}", failure);
                LoadStatus::Failed(failure.clone())
            }
        };
        self.status_tx.send_replace(status);
    }
}
