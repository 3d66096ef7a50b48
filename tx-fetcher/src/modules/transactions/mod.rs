pub mod methods;

use explorer_primitives::{FetchError, ListPage, TransactionRecord};

use crate::client::ExplorerApi;

/// Fetches the three per-hash resources concurrently and merges them into
/// one record. All three must resolve before merging; any failure fails the
/// whole join and nothing is merged.
///
/// Merge order is fixed: primary data, then the execution log, then the
/// abstract, so abstract fields win key collisions even though the calls
/// run concurrently.
pub async fn merged_transaction_details(
    explorer_api: &std::sync::Arc<Box<dyn ExplorerApi + Sync + Send + 'static>>,
    transaction_hash: &str,
) -> Result<TransactionRecord, FetchError> {
    let (primary, log, abstract_details) = futures::try_join!(
        explorer_api.get_transaction(transaction_hash),
        explorer_api.get_transaction_log(transaction_hash),
        explorer_api.get_transaction_abstract(transaction_hash),
    )?;

    let mut merged = TransactionRecord::default();
    for details in [primary, log, abstract_details] {
        merged.merge_from(details);
    }
    Ok(merged)
}

/// Fetches one list page from both chains and renames the successor chain's
/// collection field into the common shape. Either call failing fails the
/// whole page; no legacy-only data is produced.
pub async fn combined_transactions_page(
    explorer_api: &std::sync::Arc<Box<dyn ExplorerApi + Sync + Send + 'static>>,
    page: u64,
) -> Result<ListPage, FetchError> {
    let neo2 = explorer_api.get_transactions_page(None, page).await?;

    let mut neo3 = explorer_api
        .get_transactions_page(Some(configuration::ChainId::Neo3), page)
        .await?;
    neo3.normalize_successor();

    Ok(ListPage { page, neo2, neo3 })
}
