pub use crate::client::{ExplorerApi, HttpExplorerApi};
pub use crate::context::ExplorerContext;
pub use crate::display::{DisplayTransforms, ValueConverter};
pub use crate::modules::transactions::methods::{
    clear_transactions, fetch_transaction, fetch_transactions, reset_transaction_cache,
};

pub mod client;
mod context;
pub mod display;
mod metrics;
pub mod modules;
