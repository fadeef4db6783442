use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
    #[error("expected a JSON object")]
    NotAnObject,
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),
}

fn validate_order_id(order_id: &str) -> Result<(), ValidationError> {
    match Uuid::parse_str(order_id) {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("INVALID_ORDER_ID")
            .with_message(Cow::from("Order id must be a UUID"))),
    }
}

#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Order {
    #[validate(custom(function = "validate_order_id"))]
    pub order_id: String,
    #[validate(length(min = 1))]
    pub item: String,
    pub quantity: i64,
}

impl Order {
    /// Creates an order with a fresh random id.
    pub fn new(item: String, quantity: i64) -> Self {
        Self {
            order_id: Uuid::new_v4().to_string(),
            item,
            quantity,
        }
    }

    /// Message body placed on the queue.
    pub fn to_message(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a queued message body.
    ///
    /// The body must be a JSON object holding exactly `order_id` (a UUID),
    /// `item` (non-empty) and `quantity` (an integer), each key once.
    pub fn from_message(body: &str) -> Result<Self, DecodeError> {
        // Positional arrays would otherwise deserialize into the struct.
        if !serde_json::from_str::<Value>(body)?.is_object() {
            return Err(DecodeError::NotAnObject);
        }

        // Decoding straight into the struct rejects repeated keys.
        let order: Self = serde_json::from_str(body)?;
        order.validate()?;

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_ID: &str = "6f1c1c3e-9a7e-4c56-8f0e-1d2b3c4d5e6f";

    #[test]
    fn new_orders_get_distinct_ids() {
        let a = Order::new("pizza".to_string(), 1);
        let b = Order::new("pizza".to_string(), 1);

        assert_ne!(a.order_id, b.order_id);
        assert!(Uuid::parse_str(&a.order_id).is_ok());
    }

    #[test]
    fn message_body_is_plain_json() {
        let order = Order {
            order_id: ORDER_ID.to_string(),
            item: "pizza".to_string(),
            quantity: 2,
        };

        let body = order.to_message().unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "order_id": ORDER_ID, "item": "pizza", "quantity": 2 })
        );
        assert_eq!(Order::from_message(&body).unwrap(), order);
    }

    #[test]
    fn rejects_malformed_bodies() {
        let bodies = [
            "".to_string(),
            "not json".to_string(),
            format!("{{'order_id': '{ORDER_ID}', 'item': 'pizza', 'quantity': 2}}"),
            format!(r#"{{"order_id":"{ORDER_ID}","item":"pizza"}}"#),
            format!(r#"{{"order_id":"{ORDER_ID}","item":"pizza","quantity":"2"}}"#),
            format!(r#"{{"order_id":"{ORDER_ID}","item":"pizza","quantity":2.5}}"#),
            format!(r#"{{"order_id":"{ORDER_ID}","item":"pizza","quantity":2,"price":10}}"#),
            format!(r#"["{ORDER_ID}","pizza",2]"#),
        ];

        for body in &bodies {
            assert!(Order::from_message(body).is_err(), "accepted {body:?}");
        }
    }

    #[test]
    fn rejects_orders_breaking_invariants() {
        let bodies = [
            r#"{"order_id":"","item":"","quantity":1}"#.to_string(),
            format!(r#"{{"order_id":"{ORDER_ID}","item":"","quantity":1}}"#),
            r#"{"order_id":"","item":"pizza","quantity":1}"#.to_string(),
            r#"{"order_id":"o-1","item":"pizza","quantity":1}"#.to_string(),
        ];

        for body in &bodies {
            assert!(
                matches!(Order::from_message(body), Err(DecodeError::Invalid(_))),
                "accepted {body:?}"
            );
        }
    }

    #[test]
    fn rejects_repeated_keys() {
        let body = format!(
            r#"{{"order_id":"{ORDER_ID}","order_id":"{}","item":"pizza","quantity":1}}"#,
            Uuid::new_v4()
        );

        assert!(matches!(
            Order::from_message(&body),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_arrays() {
        let body = format!(r#"["{ORDER_ID}","pizza",2]"#);

        assert!(matches!(
            Order::from_message(&body),
            Err(DecodeError::NotAnObject)
        ));
    }
}
