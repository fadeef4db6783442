use super::types::response;
use crate::{modules::order::model::Order, types::Context};
use std::sync::Arc;

/// Largest batch pulled from the queue per run.
pub const BATCH_SIZE: usize = 10;

/// Drains one batch from the queue into the table.
///
/// Messages are handled in delivery order and each one is deleted only after
/// its order is written. The first failure ends the run: everything handled
/// before it stays deleted, the failing message and the rest of the batch
/// are left on the queue for redelivery.
pub async fn service(ctx: Arc<Context>) -> response::Response {
    let messages = ctx
        .queue
        .receive(BATCH_SIZE, ctx.app.receive_wait)
        .await
        .map_err(|err| response::Error::UpstreamError(err.to_string()))?;

    if messages.is_empty() {
        tracing::debug!("No orders waiting in the queue");
        return Ok(response::Success::NothingToProcess);
    }

    let total = messages.len();

    for (position, message) in messages.into_iter().enumerate() {
        let order = Order::from_message(&message.body).map_err(|err| {
            tracing::error!(
                "Failed to decode queued order {} of {}: {}",
                position + 1,
                total,
                err
            );
            response::Error::DeserializationError(err.to_string())
        })?;

        ctx.table
            .put(&order)
            .await
            .map_err(|err| response::Error::UpstreamError(err.to_string()))?;

        ctx.queue
            .delete(&message.handle)
            .await
            .map_err(|err| response::Error::UpstreamError(err.to_string()))?;

        tracing::debug!("Order {} persisted", order.order_id);
    }

    tracing::info!("Processed {} orders", total);

    Ok(response::Success::OrdersProcessed(total))
}
