use super::{Error, Table};
use crate::modules::order::model::Order;
use async_trait::async_trait;
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue, Client};

#[derive(Clone)]
pub struct DynamoTable {
    client: Client,
    table_name: String,
}

impl DynamoTable {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl Table for DynamoTable {
    async fn put(&self, order: &Order) -> Result<(), Error> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("order_id", AttributeValue::S(order.order_id.clone()))
            .item("item", AttributeValue::S(order.item.clone()))
            .item("quantity", AttributeValue::N(order.quantity.to_string()))
            .send()
            .await
            .map_err(|err| {
                let reason = DisplayErrorContext(&err).to_string();
                tracing::error!(
                    "Failed to put order {} into {}: {}",
                    order.order_id,
                    self.table_name,
                    reason
                );
                Error::PutFailed {
                    order_id: order.order_id.clone(),
                    reason,
                }
            })?;

        Ok(())
    }
}
