use serde::{Deserialize, Serialize};

/// Field under which the successor-chain backend returns its list collection.
pub const SUCCESSOR_LIST_FIELD: &str = "items";
/// Field under which consumers read the list collection for either chain.
pub const TRANSACTIONS_FIELD: &str = "transactions";

/// A single transaction as assembled from the per-hash explorer endpoints.
///
/// The backends define the fields; this layer treats the record as a flat
/// field map and merges additively, without schema validation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct TransactionRecord {
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl TransactionRecord {
    /// Shallow-copies all fields of `other` into `self`.
    /// Fields already present are overwritten, so the caller's merge order
    /// defines the collision precedence.
    pub fn merge_from(&mut self, other: TransactionRecord) {
        for (field, value) in other.fields {
            self.fields.insert(field, value);
        }
    }

    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.fields.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One chain's response body for a transactions list page, kept as a flat
/// field map so backend-specific fields survive untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ChainPage {
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl ChainPage {
    /// The unified transaction collection of this page.
    pub fn transactions(&self) -> &[serde_json::Value] {
        self.fields
            .get(TRANSACTIONS_FIELD)
            .and_then(|collection| collection.as_array())
            .map(|transactions| transactions.as_slice())
            .unwrap_or(&[])
    }

    /// Renames the successor chain's `items` collection into the common
    /// `transactions` field. The target field is always created, an empty
    /// list when the source collection is missing from the response.
    pub fn normalize_successor(&mut self) {
        let collection = self
            .fields
            .remove(SUCCESSOR_LIST_FIELD)
            .unwrap_or(serde_json::Value::Array(vec![]));
        self.fields
            .insert(TRANSACTIONS_FIELD.to_string(), collection);
    }
}

/// A combined two-chain list page as consumers see it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListPage {
    pub page: u64,
    pub neo2: ChainPage,
    pub neo3: ChainPage,
}

impl ListPage {
    /// Number of transactions this page contributes across both chains.
    pub fn transaction_count(&self) -> usize {
        self.neo2.transactions().len() + self.neo3.transactions().len()
    }
}

/// Failures a fetch can surface, identical for single-transaction and list
/// requests. Any member of a joined request set failing fails the whole set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not complete (connect failure, non-success status).
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    /// The response body could not be decoded as JSON.
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Lifecycle of a single fetch request as consumers observe it.
///
/// A `Reset`/`Cleared` command is the only way an entry leaves the map
/// again; failed entries stay `Failed` until the same fetch is re-issued.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Pending,
    Fulfilled {
        value: T,
        received_at: chrono::DateTime<chrono::Utc>,
    },
    Failed {
        error: FetchError,
        received_at: chrono::DateTime<chrono::Utc>,
    },
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn fulfilled_value(&self) -> Option<&T> {
        match self {
            RequestState::Fulfilled { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            RequestState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// State-transition commands for the per-hash transaction cache.
/// Terminal outcomes carry the timestamp stamped at emission time.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionCommand {
    RequestStarted {
        hash: String,
    },
    RequestSucceeded {
        hash: String,
        record: TransactionRecord,
        received_at: chrono::DateTime<chrono::Utc>,
    },
    RequestFailed {
        hash: String,
        error: FetchError,
        received_at: chrono::DateTime<chrono::Utc>,
    },
    Reset,
}

impl TransactionCommand {
    pub fn started(hash: String) -> Self {
        Self::RequestStarted { hash }
    }

    pub fn succeeded(hash: String, record: TransactionRecord) -> Self {
        Self::RequestSucceeded {
            hash,
            record,
            received_at: chrono::Utc::now(),
        }
    }

    pub fn failed(hash: String, error: FetchError) -> Self {
        Self::RequestFailed {
            hash,
            error,
            received_at: chrono::Utc::now(),
        }
    }

    pub fn reset() -> Self {
        Self::Reset
    }
}

/// State-transition commands for the paginated two-chain list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListCommand {
    RequestStarted {
        page: u64,
    },
    RequestSucceeded {
        page: u64,
        payload: ListPage,
        received_at: chrono::DateTime<chrono::Utc>,
    },
    RequestFailed {
        page: u64,
        error: FetchError,
        received_at: chrono::DateTime<chrono::Utc>,
    },
    Cleared,
}

impl ListCommand {
    pub fn started(page: u64) -> Self {
        Self::RequestStarted { page }
    }

    pub fn succeeded(page: u64, payload: ListPage) -> Self {
        Self::RequestSucceeded {
            page,
            payload,
            received_at: chrono::Utc::now(),
        }
    }

    pub fn failed(page: u64, error: FetchError) -> Self {
        Self::RequestFailed {
            page,
            error,
            received_at: chrono::Utc::now(),
        }
    }

    pub fn cleared() -> Self {
        Self::Cleared
    }
}
