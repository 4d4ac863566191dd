use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        providers::{HuggingFaceClient, TextGenerator},
        Recommender,
    },
};

/// Shared application state
///
/// Nothing here is mutable: each request reloads the catalog on its own, so
/// handlers never contend for a lock.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

impl AppState {
    /// Creates state around an explicit catalog path and text generator
    pub fn new(catalog_path: impl Into<std::path::PathBuf>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            recommender: Arc::new(Recommender::new(catalog_path, generator)),
        }
    }

    /// Creates state backed by the Hugging Face inference API
    pub fn from_config(config: &Config) -> Self {
        let generator = Arc::new(HuggingFaceClient::from_config(config));
        Self::new(&config.catalog_path, generator)
    }
}
