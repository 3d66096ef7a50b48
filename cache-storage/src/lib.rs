use std::collections::{BTreeMap, HashMap};

use explorer_primitives::{
    ListCommand, ListPage, RequestState, TransactionCommand, TransactionRecord,
};

/// Accumulated list view handed to consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot {
    /// Fulfilled pages in ascending page order.
    pub pages: Vec<ListPage>,
    /// Whether any page request is currently in flight.
    pub is_loading: bool,
    /// Transactions accumulated across all fulfilled pages, both chains.
    pub total_transactions: usize,
}

/// In-memory store for single-transaction lookups and the paginated list.
///
/// The two aggregates are independent: `Reset` empties only the per-hash
/// cache, `Cleared` only the list. All mutation goes through the typed
/// commands; each application takes the write lock once and never suspends
/// while holding it, so commands apply atomically with respect to
/// concurrent readers. This component performs no I/O.
#[derive(Clone)]
pub struct TransactionCacheStorage {
    cached_transactions:
        futures_locks::RwLock<HashMap<String, RequestState<TransactionRecord>>>,
    list_pages: futures_locks::RwLock<BTreeMap<u64, RequestState<ListPage>>>,
}

impl TransactionCacheStorage {
    pub fn new() -> Self {
        Self {
            cached_transactions: futures_locks::RwLock::new(HashMap::new()),
            list_pages: futures_locks::RwLock::new(BTreeMap::new()),
        }
    }

    /// Applies one state transition to the per-hash cache.
    /// Entries for other hashes are never touched.
    pub async fn apply_transaction_command(&self, command: TransactionCommand) {
        let mut cached_transactions = self.cached_transactions.write().await;
        match command {
            TransactionCommand::RequestStarted { hash } => {
                cached_transactions.insert(hash, RequestState::Pending);
            }
            TransactionCommand::RequestSucceeded {
                hash,
                record,
                received_at,
            } => {
                cached_transactions.insert(
                    hash,
                    RequestState::Fulfilled {
                        value: record,
                        received_at,
                    },
                );
            }
            TransactionCommand::RequestFailed {
                hash,
                error,
                received_at,
            } => {
                tracing::debug!("Transaction request failed. Hash: {}. Error: {}", hash, error);
                cached_transactions.insert(hash, RequestState::Failed { error, received_at });
            }
            TransactionCommand::Reset => {
                cached_transactions.clear();
            }
        }
    }

    /// Applies one state transition to the list aggregate.
    /// A page's result merges into the accumulated map; other pages are kept.
    pub async fn apply_list_command(&self, command: ListCommand) {
        let mut list_pages = self.list_pages.write().await;
        match command {
            ListCommand::RequestStarted { page } => {
                list_pages.insert(page, RequestState::Pending);
            }
            ListCommand::RequestSucceeded {
                page,
                payload,
                received_at,
            } => {
                list_pages.insert(
                    page,
                    RequestState::Fulfilled {
                        value: payload,
                        received_at,
                    },
                );
            }
            ListCommand::RequestFailed {
                page,
                error,
                received_at,
            } => {
                tracing::debug!("Transactions list request failed. Page: {}. Error: {}", page, error);
                list_pages.insert(page, RequestState::Failed { error, received_at });
            }
            ListCommand::Cleared => {
                list_pages.clear();
            }
        }
    }

    /// Lifecycle state for the given hash, `Idle` when never requested.
    pub async fn transaction_state(&self, hash: &str) -> RequestState<TransactionRecord> {
        self.cached_transactions
            .read()
            .await
            .get(hash)
            .cloned()
            .unwrap_or_default()
    }

    /// The cached record for the hash, present only after a successful fetch.
    /// While present it is authoritative and suppresses further fetches.
    pub async fn cached_transaction(&self, hash: &str) -> Option<TransactionRecord> {
        self.cached_transactions
            .read()
            .await
            .get(hash)
            .and_then(|state| state.fulfilled_value().cloned())
    }

    /// Whether a fetch for the hash is currently in flight.
    pub async fn transaction_in_flight(&self, hash: &str) -> bool {
        self.cached_transactions
            .read()
            .await
            .get(hash)
            .map(RequestState::is_pending)
            .unwrap_or(false)
    }

    /// Lifecycle state for the given list page, `Idle` when never requested.
    pub async fn page_state(&self, page: u64) -> RequestState<ListPage> {
        self.list_pages
            .read()
            .await
            .get(&page)
            .cloned()
            .unwrap_or_default()
    }

    /// Accumulated fulfilled pages plus the loading flag and total count.
    pub async fn list_snapshot(&self) -> ListSnapshot {
        let list_pages = self.list_pages.read().await;
        let mut pages = Vec::new();
        let mut is_loading = false;
        for state in list_pages.values() {
            match state {
                RequestState::Pending => is_loading = true,
                RequestState::Fulfilled { value, .. } => pages.push(value.clone()),
                RequestState::Idle | RequestState::Failed { .. } => {}
            }
        }
        let total_transactions = pages.iter().map(ListPage::transaction_count).sum();
        ListSnapshot {
            pages,
            is_loading,
            total_transactions,
        }
    }
}

impl Default for TransactionCacheStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_primitives::FetchError;

    fn record(json: serde_json::Value) -> TransactionRecord {
        serde_json::from_value(json).unwrap()
    }

    fn list_page(page: u64, neo2: serde_json::Value, neo3: serde_json::Value) -> ListPage {
        ListPage {
            page,
            neo2: serde_json::from_value(neo2).unwrap(),
            neo3: serde_json::from_value(neo3).unwrap(),
        }
    }

    fn transport_error() -> FetchError {
        FetchError::Transport {
            url: "http://backend/transaction/0xABC".to_string(),
            message: "connection refused".to_string(),
        }
    }

    #[tokio::test]
    async fn transaction_lifecycle_transitions() {
        let storage = TransactionCacheStorage::new();
        assert_eq!(
            storage.transaction_state("0xABC").await,
            RequestState::Idle
        );

        storage
            .apply_transaction_command(TransactionCommand::started("0xABC".to_string()))
            .await;
        assert!(storage.transaction_in_flight("0xABC").await);
        assert!(storage.cached_transaction("0xABC").await.is_none());

        storage
            .apply_transaction_command(TransactionCommand::succeeded(
                "0xABC".to_string(),
                record(serde_json::json!({"amount": 1})),
            ))
            .await;
        assert!(!storage.transaction_in_flight("0xABC").await);
        assert_eq!(
            storage.cached_transaction("0xABC").await,
            Some(record(serde_json::json!({"amount": 1})))
        );
    }

    #[tokio::test]
    async fn failure_for_one_hash_leaves_others_untouched() {
        let storage = TransactionCacheStorage::new();
        storage
            .apply_transaction_command(TransactionCommand::succeeded(
                "0xAAA".to_string(),
                record(serde_json::json!({"amount": 1})),
            ))
            .await;
        storage
            .apply_transaction_command(TransactionCommand::failed(
                "0xBBB".to_string(),
                transport_error(),
            ))
            .await;

        assert!(storage.cached_transaction("0xAAA").await.is_some());
        assert_eq!(
            storage.transaction_state("0xBBB").await.error(),
            Some(&transport_error())
        );
    }

    #[tokio::test]
    async fn started_does_not_clear_other_fulfilled_entries() {
        let storage = TransactionCacheStorage::new();
        storage
            .apply_transaction_command(TransactionCommand::succeeded(
                "0xAAA".to_string(),
                record(serde_json::json!({"amount": 1})),
            ))
            .await;
        storage
            .apply_transaction_command(TransactionCommand::started("0xBBB".to_string()))
            .await;

        assert!(storage.cached_transaction("0xAAA").await.is_some());
        assert!(storage.transaction_in_flight("0xBBB").await);
    }

    #[tokio::test]
    async fn list_pages_accumulate_instead_of_replacing() {
        let storage = TransactionCacheStorage::new();
        storage
            .apply_list_command(ListCommand::succeeded(
                1,
                list_page(
                    1,
                    serde_json::json!({"transactions": [{"hash": "a"}]}),
                    serde_json::json!({"transactions": [{"hash": "b"}]}),
                ),
            ))
            .await;
        storage
            .apply_list_command(ListCommand::succeeded(
                2,
                list_page(
                    2,
                    serde_json::json!({"transactions": [{"hash": "c"}]}),
                    serde_json::json!({"transactions": []}),
                ),
            ))
            .await;

        let snapshot = storage.list_snapshot().await;
        assert_eq!(snapshot.pages.len(), 2);
        assert_eq!(snapshot.pages[0].page, 1);
        assert_eq!(snapshot.pages[1].page, 2);
        assert_eq!(snapshot.total_transactions, 3);
        assert!(!snapshot.is_loading);
    }

    #[tokio::test]
    async fn pending_page_sets_the_loading_flag() {
        let storage = TransactionCacheStorage::new();
        storage
            .apply_list_command(ListCommand::succeeded(
                1,
                list_page(
                    1,
                    serde_json::json!({"transactions": [{"hash": "a"}]}),
                    serde_json::json!({"transactions": []}),
                ),
            ))
            .await;
        storage.apply_list_command(ListCommand::started(2)).await;

        let snapshot = storage.list_snapshot().await;
        assert!(snapshot.is_loading);
        assert_eq!(snapshot.pages.len(), 1);
        assert!(storage.page_state(2).await.is_pending());
    }

    #[tokio::test]
    async fn clear_empties_the_list_but_not_the_transaction_cache() {
        let storage = TransactionCacheStorage::new();
        storage
            .apply_transaction_command(TransactionCommand::succeeded(
                "0xABC".to_string(),
                record(serde_json::json!({"amount": 1})),
            ))
            .await;
        storage
            .apply_list_command(ListCommand::succeeded(
                1,
                list_page(
                    1,
                    serde_json::json!({"transactions": [{"hash": "a"}]}),
                    serde_json::json!({"transactions": []}),
                ),
            ))
            .await;

        storage.apply_list_command(ListCommand::cleared()).await;

        let snapshot = storage.list_snapshot().await;
        assert!(snapshot.pages.is_empty());
        assert_eq!(snapshot.total_transactions, 0);
        assert!(storage.cached_transaction("0xABC").await.is_some());
    }

    #[tokio::test]
    async fn reset_empties_the_transaction_cache_but_not_the_list() {
        let storage = TransactionCacheStorage::new();
        storage
            .apply_transaction_command(TransactionCommand::succeeded(
                "0xABC".to_string(),
                record(serde_json::json!({"amount": 1})),
            ))
            .await;
        storage
            .apply_list_command(ListCommand::succeeded(
                1,
                list_page(
                    1,
                    serde_json::json!({"transactions": [{"hash": "a"}]}),
                    serde_json::json!({"transactions": []}),
                ),
            ))
            .await;

        storage
            .apply_transaction_command(TransactionCommand::reset())
            .await;

        assert!(storage.cached_transaction("0xABC").await.is_none());
        assert_eq!(
            storage.transaction_state("0xABC").await,
            RequestState::Idle
        );
        assert_eq!(storage.list_snapshot().await.pages.len(), 1);
    }

    #[tokio::test]
    async fn refetching_a_page_replaces_only_that_page() {
        let storage = TransactionCacheStorage::new();
        storage
            .apply_list_command(ListCommand::succeeded(
                1,
                list_page(
                    1,
                    serde_json::json!({"transactions": [{"hash": "a"}]}),
                    serde_json::json!({"transactions": []}),
                ),
            ))
            .await;
        storage
            .apply_list_command(ListCommand::succeeded(
                1,
                list_page(
                    1,
                    serde_json::json!({"transactions": [{"hash": "a"}, {"hash": "d"}]}),
                    serde_json::json!({"transactions": []}),
                ),
            ))
            .await;

        let snapshot = storage.list_snapshot().await;
        assert_eq!(snapshot.pages.len(), 1);
        assert_eq!(snapshot.total_transactions, 2);
    }

    #[tokio::test]
    async fn failed_page_is_not_part_of_the_snapshot() {
        let storage = TransactionCacheStorage::new();
        storage
            .apply_list_command(ListCommand::failed(3, transport_error()))
            .await;

        let snapshot = storage.list_snapshot().await;
        assert!(snapshot.pages.is_empty());
        assert!(!snapshot.is_loading);
        assert_eq!(
            storage.page_state(3).await.error(),
            Some(&transport_error())
        );
    }
}
