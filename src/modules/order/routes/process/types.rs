pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use thiserror::Error;

    #[derive(Debug, PartialEq, Eq)]
    pub enum Success {
        NothingToProcess,
        OrdersProcessed(usize),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NothingToProcess => (
                    StatusCode::OK,
                    Json(json!({ "message": "No orders to process" })),
                )
                    .into_response(),
                Self::OrdersProcessed(_) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Orders processed successfully" })),
                )
                    .into_response(),
            }
        }
    }

    #[derive(Debug, Error)]
    pub enum Error {
        #[error("{0}")]
        UpstreamError(String),
        #[error("Malformed order message: {0}")]
        DeserializationError(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
