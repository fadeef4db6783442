use super::types::{request, response};
use crate::{modules::order::model::Order, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::InvalidInput
    })?;

    let (Some(item), Some(quantity)) = (payload.item, payload.quantity) else {
        return Err(response::Error::InvalidInput);
    };

    let order = Order::new(item, quantity);

    let body = order.to_message().map_err(|err| {
        tracing::error!("Failed to serialize order {}: {}", order.order_id, err);
        response::Error::UnexpectedError(err.to_string())
    })?;

    ctx.queue
        .enqueue(body)
        .await
        .map_err(|err| response::Error::UpstreamError(err.to_string()))?;

    tracing::info!("Order {} queued", order.order_id);

    Ok(response::Success::OrderCreated(order.order_id))
}
