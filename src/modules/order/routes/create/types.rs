pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(required, length(min = 1))]
        pub item: Option<String>,
        #[validate(required)]
        pub quantity: Option<i64>,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderCreated(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order_id) => (
                    StatusCode::CREATED,
                    Json(json!({ "order_id": order_id })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidInput,
        UpstreamError(String),
        UnexpectedError(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidInput => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid input" })),
                )
                    .into_response(),
                Self::UpstreamError(message) | Self::UnexpectedError(message) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
