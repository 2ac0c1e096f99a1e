//! One-shot asynchronous catalog loading
//!
//! A [`CatalogLoader`] fetches the catalog text from a [`CatalogSource`],
//! decodes it once and publishes the terminal status to any number of
//! observers. Repeated or concurrent calls to `load()` share the single
//! decode pass.

pub mod loader;
pub mod source;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use loader::{CatalogLoader, LoadFailure, LoadStatus};
pub use source::{CatalogSource, FileSource, InMemorySource};
