mod handler;
pub mod service;
pub mod types;

use crate::types::Context;
use axum::routing::{post, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/process-orders", post(handler::handler))
}
