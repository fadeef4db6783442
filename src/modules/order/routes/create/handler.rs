use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::extract::{rejection::JsonRejection, Json, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    payload: Result<Json<request::Payload>, JsonRejection>,
) -> response::Response {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!("Rejected order payload: {}", rejection.body_text());
        response::Error::InvalidInput
    })?;

    service(ctx, payload).await
}
