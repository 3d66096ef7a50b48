use crate::client::{ExplorerApi, HttpExplorerApi};

/// Shared handles the orchestrators operate on.
#[derive(Clone)]
pub struct ExplorerContext {
    pub explorer_api: std::sync::Arc<Box<dyn ExplorerApi + Sync + Send + 'static>>,
    pub tx_cache: std::sync::Arc<cache_storage::TransactionCacheStorage>,
}

impl ExplorerContext {
    /// Builds a context backed by the HTTP explorer client.
    pub fn new(service_config: configuration::ServiceConfig) -> Self {
        Self::with_api(Box::new(HttpExplorerApi::new(service_config)))
    }

    /// Builds a context around an arbitrary API implementation.
    pub fn with_api(explorer_api: Box<dyn ExplorerApi + Sync + Send + 'static>) -> Self {
        Self {
            explorer_api: std::sync::Arc::new(explorer_api),
            tx_cache: std::sync::Arc::new(cache_storage::TransactionCacheStorage::new()),
        }
    }
}
