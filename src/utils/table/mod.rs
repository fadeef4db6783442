mod dynamodb;
mod in_memory;

pub use dynamodb::DynamoTable;
pub use in_memory::InMemoryTable;

use crate::modules::order::model::Order;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to save order {order_id}: {reason}")]
    PutFailed { order_id: String, reason: String },
}

/// Durable order store keyed by `order_id`.
#[async_trait]
pub trait Table: Send + Sync {
    /// Inserts the order or overwrites the record with the same `order_id`.
    async fn put(&self, order: &Order) -> Result<(), Error>;
}
