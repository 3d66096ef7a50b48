use explorer_primitives::{ChainPage, FetchError, TransactionRecord};

/// Backend API surface the orchestrators fetch through.
///
/// Splitting this out keeps the merge/normalize/failure logic testable
/// without a network; the HTTP implementation below is the production one.
#[async_trait::async_trait]
pub trait ExplorerApi {
    /// Primary transaction data for the hash.
    async fn get_transaction(
        &self,
        transaction_hash: &str,
    ) -> Result<TransactionRecord, FetchError>;

    /// Execution log for the hash.
    async fn get_transaction_log(
        &self,
        transaction_hash: &str,
    ) -> Result<TransactionRecord, FetchError>;

    /// Abstract/summary data for the hash.
    async fn get_transaction_abstract(
        &self,
        transaction_hash: &str,
    ) -> Result<TransactionRecord, FetchError>;

    /// One chain's transactions list for the given page.
    /// `None` targets the configured default chain.
    async fn get_transactions_page(
        &self,
        chain_id: Option<configuration::ChainId>,
        page: u64,
    ) -> Result<ChainPage, FetchError>;
}

/// HTTP client for the explorer REST backends.
/// Base addresses are resolved through the configuration layer; this client
/// never constructs them itself.
#[derive(Clone, Debug)]
pub struct HttpExplorerApi {
    http_client: reqwest::Client,
    service_config: configuration::ServiceConfig,
}

impl HttpExplorerApi {
    pub fn new(service_config: configuration::ServiceConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            service_config,
        }
    }

    async fn fetch_json<T>(
        &self,
        chain_id: Option<configuration::ChainId>,
        path: String,
    ) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.service_config.base_url(chain_id), path);
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| FetchError::Transport {
                url: url.clone(),
                message: err.to_string(),
            })?;
        let body = response.text().await.map_err(|err| FetchError::Transport {
            url: url.clone(),
            message: err.to_string(),
        })?;
        serde_json::from_str::<T>(&body).map_err(|err| FetchError::Decode {
            url,
            message: err.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl ExplorerApi for HttpExplorerApi {
    async fn get_transaction(
        &self,
        transaction_hash: &str,
    ) -> Result<TransactionRecord, FetchError> {
        crate::metrics::EXPLORER_API_REQUESTS_TOTAL
            .with_label_values(&["transaction"])
            .inc();
        self.fetch_json(None, format!("/transaction/{}", transaction_hash))
            .await
    }

    async fn get_transaction_log(
        &self,
        transaction_hash: &str,
    ) -> Result<TransactionRecord, FetchError> {
        crate::metrics::EXPLORER_API_REQUESTS_TOTAL
            .with_label_values(&["log"])
            .inc();
        self.fetch_json(None, format!("/log/{}", transaction_hash))
            .await
    }

    async fn get_transaction_abstract(
        &self,
        transaction_hash: &str,
    ) -> Result<TransactionRecord, FetchError> {
        crate::metrics::EXPLORER_API_REQUESTS_TOTAL
            .with_label_values(&["transaction_abstracts"])
            .inc();
        self.fetch_json(None, format!("/transaction_abstracts/{}", transaction_hash))
            .await
    }

    async fn get_transactions_page(
        &self,
        chain_id: Option<configuration::ChainId>,
        page: u64,
    ) -> Result<ChainPage, FetchError> {
        crate::metrics::EXPLORER_API_REQUESTS_TOTAL
            .with_label_values(&["transactions"])
            .inc();
        self.fetch_json(chain_id, format!("/transactions/{}", page))
            .await
    }
}
