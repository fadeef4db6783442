mod in_memory;
mod sqs;

pub use in_memory::InMemoryQueue;
pub use sqs::SqsQueue;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to enqueue message: {0}")]
    EnqueueFailed(String),
    #[error("Failed to receive messages: {0}")]
    ReceiveFailed(String),
    #[error("Failed to delete message: {0}")]
    DeleteFailed(String),
}

/// Opaque token handed out with a delivery. Required to acknowledge it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryHandle(pub String);

#[derive(Clone, Debug)]
pub struct ReceivedMessage {
    pub body: String,
    pub handle: DeliveryHandle,
}

/// Message queue the intake writes to and the processor drains.
///
/// A received message stays invisible to other consumers for the queue's
/// visibility window. If it is not deleted within that window it becomes
/// deliverable again.
#[async_trait]
pub trait Queue: Send + Sync {
    async fn enqueue(&self, body: String) -> Result<(), Error>;

    /// Waits up to `wait` for messages and returns at most `max_messages`.
    /// An empty result is not an error.
    async fn receive(
        &self,
        max_messages: usize,
        wait: Duration,
    ) -> Result<Vec<ReceivedMessage>, Error>;

    async fn delete(&self, handle: &DeliveryHandle) -> Result<(), Error>;
}
