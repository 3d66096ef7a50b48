use explorer_primitives::{ListCommand, TransactionCommand};

use crate::context::ExplorerContext;

/// Resolves a transaction by hash into the cache, fetching over the network
/// only when no fulfilled entry exists. Outcomes are never returned to the
/// caller; consumers observe them by reading the request state.
pub async fn fetch_transaction(context: &ExplorerContext, transaction_hash: &str) {
    tracing::debug!("`fetch_transaction` call. Hash: {}", transaction_hash);
    crate::metrics::TRANSACTION_REQUESTS_TOTAL.inc();

    // A fulfilled entry is authoritative: re-emit it instead of refetching,
    // even if the cached content is stale.
    if let Some(cached) = context.tx_cache.cached_transaction(transaction_hash).await {
        crate::metrics::TRANSACTION_CACHE_HITS_TOTAL.inc();
        context
            .tx_cache
            .apply_transaction_command(TransactionCommand::succeeded(
                transaction_hash.to_string(),
                cached,
            ))
            .await;
        return;
    }

    // A pending entry already has a request in flight; concurrent callers
    // converge on its outcome instead of fetching the same hash twice.
    if context.tx_cache.transaction_in_flight(transaction_hash).await {
        return;
    }

    context
        .tx_cache
        .apply_transaction_command(TransactionCommand::started(transaction_hash.to_string()))
        .await;

    match super::merged_transaction_details(&context.explorer_api, transaction_hash).await {
        Ok(record) => {
            context
                .tx_cache
                .apply_transaction_command(TransactionCommand::succeeded(
                    transaction_hash.to_string(),
                    record,
                ))
                .await;
        }
        Err(err) => {
            tracing::warn!(
                "Error in `fetch_transaction`. Hash: {}. Error: {:?}",
                transaction_hash,
                err
            );
            context
                .tx_cache
                .apply_transaction_command(TransactionCommand::failed(
                    transaction_hash.to_string(),
                    err,
                ))
                .await;
        }
    }
}

/// Fetches one page of the combined two-chain transactions list.
/// List pages always refetch; there is no cache short-circuit here.
pub async fn fetch_transactions(context: &ExplorerContext, page: Option<u64>) {
    let page = page.unwrap_or(1);
    tracing::debug!("`fetch_transactions` call. Page: {}", page);
    crate::metrics::TRANSACTIONS_LIST_REQUESTS_TOTAL.inc();

    context
        .tx_cache
        .apply_list_command(ListCommand::started(page))
        .await;

    match super::combined_transactions_page(&context.explorer_api, page).await {
        Ok(payload) => {
            context
                .tx_cache
                .apply_list_command(ListCommand::succeeded(page, payload))
                .await;
        }
        Err(err) => {
            tracing::warn!(
                "Error in `fetch_transactions`. Page: {}. Error: {:?}",
                page,
                err
            );
            context
                .tx_cache
                .apply_list_command(ListCommand::failed(page, err))
                .await;
        }
    }
}

/// Empties the accumulated list aggregate, e.g. when the consumer navigates
/// away from the list view. The single-transaction cache is untouched.
pub async fn clear_transactions(context: &ExplorerContext) {
    tracing::debug!("`clear_transactions` call");
    context
        .tx_cache
        .apply_list_command(ListCommand::cleared())
        .await;
}

/// Empties the single-transaction cache. The list aggregate is untouched.
pub async fn reset_transaction_cache(context: &ExplorerContext) {
    tracing::debug!("`reset_transaction_cache` call");
    context
        .tx_cache
        .apply_transaction_command(TransactionCommand::reset())
        .await;
}
