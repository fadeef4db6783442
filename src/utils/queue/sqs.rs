use super::{DeliveryHandle, Error, Queue, ReceivedMessage};
use async_trait::async_trait;
use aws_sdk_sqs::{error::DisplayErrorContext, Client};
use std::time::Duration;

// SQS caps a single receive at 10 messages and long polling at 20 seconds.
const MAX_BATCH: usize = 10;
const MAX_WAIT_SECONDS: u64 = 20;

#[derive(Clone)]
pub struct SqsQueue {
    client: Client,
    queue_url: String,
}

impl SqsQueue {
    pub fn new(client: Client, queue_url: String) -> Self {
        Self { client, queue_url }
    }
}

#[async_trait]
impl Queue for SqsQueue {
    async fn enqueue(&self, body: String) -> Result<(), Error> {
        let output = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|err| {
                let err = DisplayErrorContext(&err).to_string();
                tracing::error!("Failed to send message to {}: {}", self.queue_url, err);
                Error::EnqueueFailed(err)
            })?;

        tracing::debug!("Message sent: {:?}", output.message_id());

        Ok(())
    }

    async fn receive(
        &self,
        max_messages: usize,
        wait: Duration,
    ) -> Result<Vec<ReceivedMessage>, Error> {
        let max_messages = max_messages.clamp(1, MAX_BATCH) as i32;
        let wait_seconds = wait.as_secs().min(MAX_WAIT_SECONDS) as i32;

        let output = self
            .client
            .receive_message()
            .queue_url(&self.queue_url)
            .max_number_of_messages(max_messages)
            .wait_time_seconds(wait_seconds)
            .send()
            .await
            .map_err(|err| {
                let err = DisplayErrorContext(&err).to_string();
                tracing::error!("Failed to receive messages from {}: {}", self.queue_url, err);
                Error::ReceiveFailed(err)
            })?;

        let messages = output
            .messages()
            .iter()
            .filter_map(|message| match message.receipt_handle() {
                Some(handle) => Some(ReceivedMessage {
                    body: message.body().unwrap_or_default().to_string(),
                    handle: DeliveryHandle(handle.to_string()),
                }),
                None => {
                    tracing::warn!(
                        "Skipping message {:?} without a receipt handle",
                        message.message_id()
                    );
                    None
                }
            })
            .collect();

        Ok(messages)
    }

    async fn delete(&self, handle: &DeliveryHandle) -> Result<(), Error> {
        self.client
            .delete_message()
            .queue_url(&self.queue_url)
            .receipt_handle(&handle.0)
            .send()
            .await
            .map_err(|err| {
                let err = DisplayErrorContext(&err).to_string();
                tracing::error!("Failed to delete message from {}: {}", self.queue_url, err);
                Error::DeleteFailed(err)
            })?;

        Ok(())
    }
}
