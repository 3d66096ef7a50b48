use prometheus::{IntCounter, IntCounterVec, Opts};

type Result<T, E> = std::result::Result<T, E>;

fn try_create_int_counter(name: &str, help: &str) -> Result<IntCounter, prometheus::Error> {
    let opts = Opts::new(name, help);
    let counter = IntCounter::with_opts(opts)?;
    prometheus::register(Box::new(counter.clone()))?;
    Ok(counter)
}

fn try_create_int_counter_vec(
    name: &str,
    help: &str,
    labels: &[&str],
) -> Result<IntCounterVec, prometheus::Error> {
    let opts = Opts::new(name, help);
    let counter_vec = IntCounterVec::new(opts, labels)?;
    prometheus::register(Box::new(counter_vec.clone()))?;
    Ok(counter_vec)
}

lazy_static::lazy_static! {
    pub(crate) static ref TRANSACTION_REQUESTS_TOTAL: IntCounter = try_create_int_counter(
        "total_transaction_requests",
        "Total number of single-transaction fetch commands"
    )
    .unwrap();
    pub(crate) static ref TRANSACTION_CACHE_HITS_TOTAL: IntCounter = try_create_int_counter(
        "total_transaction_cache_hits",
        "Total number of single-transaction fetches served from the cache"
    )
    .unwrap();
    pub(crate) static ref TRANSACTIONS_LIST_REQUESTS_TOTAL: IntCounter = try_create_int_counter(
        "total_transactions_list_requests",
        "Total number of paginated list fetch commands"
    )
    .unwrap();
    pub(crate) static ref EXPLORER_API_REQUESTS_TOTAL: IntCounterVec = try_create_int_counter_vec(
        "total_explorer_api_requests",
        "Total number of HTTP requests issued to the explorer backends",
        &["endpoint"]
    )
    .unwrap();
}
