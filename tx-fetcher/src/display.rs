use std::collections::HashMap;

use explorer_primitives::TransactionRecord;

/// Async conversion applied to one field value when rendering.
pub type ValueConverter = std::sync::Arc<
    dyn Fn(serde_json::Value) -> futures::future::BoxFuture<'static, serde_json::Value>
        + Send
        + Sync,
>;

/// Display-side value conversions supplied by the consumer, keyed by field
/// name. Conversions run only when rendering; the converted copy is handed
/// to the consumer and never written back into the cache.
#[derive(Clone, Default)]
pub struct DisplayTransforms {
    converters: HashMap<String, ValueConverter>,
}

impl DisplayTransforms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an asynchronous converter for a field.
    pub fn register<F>(&mut self, field: &str, converter: F)
    where
        F: Fn(serde_json::Value) -> futures::future::BoxFuture<'static, serde_json::Value>
            + Send
            + Sync
            + 'static,
    {
        self.converters
            .insert(field.to_string(), std::sync::Arc::new(converter));
    }

    /// Registers a synchronous converter for a field.
    pub fn register_sync<F>(&mut self, field: &str, converter: F)
    where
        F: Fn(serde_json::Value) -> serde_json::Value + Send + Sync + 'static,
    {
        let converter = std::sync::Arc::new(converter);
        self.register(field, move |value| {
            let converter = std::sync::Arc::clone(&converter);
            Box::pin(async move { converter(value) })
        });
    }

    /// Returns a display copy of the record with conversions applied to the
    /// fields that carry one.
    pub async fn render(&self, record: &TransactionRecord) -> TransactionRecord {
        let mut rendered = record.clone();
        for (field, converter) in &self.converters {
            if let Some(value) = rendered.fields.get(field).cloned() {
                rendered.fields.insert(field.clone(), converter(value).await);
            }
        }
        rendered
    }
}
