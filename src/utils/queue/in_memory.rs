//! Process-local queue with SQS-like delivery semantics.
//!
//! Every delivery hides the message for the visibility timeout and issues a
//! fresh delivery handle. Only the handle from the latest delivery can
//! delete the message.

use super::{DeliveryHandle, Error, Queue, ReceivedMessage};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::Mutex,
    time::{sleep, Instant},
};
use uuid::Uuid;

const DEFAULT_VISIBILITY_TIMEOUT: Duration = Duration::from_secs(30);
const POLL_INTERVAL: Duration = Duration::from_millis(10);

struct Slot {
    body: String,
    handle: Option<String>,
    visible_at: Instant,
}

#[derive(Clone)]
pub struct InMemoryQueue {
    slots: Arc<Mutex<Vec<Slot>>>,
    visibility_timeout: Duration,
}

impl Default for InMemoryQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryQueue {
    pub fn new() -> Self {
        Self::with_visibility_timeout(DEFAULT_VISIBILITY_TIMEOUT)
    }

    pub fn with_visibility_timeout(visibility_timeout: Duration) -> Self {
        Self {
            slots: Arc::new(Mutex::new(Vec::new())),
            visibility_timeout,
        }
    }

    /// Messages not yet deleted, whether currently visible or not.
    pub async fn len(&self) -> usize {
        self.slots.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.lock().await.is_empty()
    }

    pub async fn bodies(&self) -> Vec<String> {
        self.slots
            .lock()
            .await
            .iter()
            .map(|slot| slot.body.clone())
            .collect()
    }

    fn take_visible(&self, slots: &mut [Slot], max_messages: usize) -> Vec<ReceivedMessage> {
        let now = Instant::now();

        slots
            .iter_mut()
            .filter(|slot| slot.visible_at <= now)
            .take(max_messages)
            .map(|slot| {
                let handle = Uuid::new_v4().to_string();
                slot.handle = Some(handle.clone());
                slot.visible_at = now + self.visibility_timeout;
                ReceivedMessage {
                    body: slot.body.clone(),
                    handle: DeliveryHandle(handle),
                }
            })
            .collect()
    }
}

#[async_trait]
impl Queue for InMemoryQueue {
    async fn enqueue(&self, body: String) -> Result<(), Error> {
        self.slots.lock().await.push(Slot {
            body,
            handle: None,
            visible_at: Instant::now(),
        });
        Ok(())
    }

    async fn receive(
        &self,
        max_messages: usize,
        wait: Duration,
    ) -> Result<Vec<ReceivedMessage>, Error> {
        let deadline = Instant::now() + wait;

        loop {
            {
                let mut slots = self.slots.lock().await;
                let messages = self.take_visible(&mut slots, max_messages);
                if !messages.is_empty() {
                    return Ok(messages);
                }
            }

            if Instant::now() >= deadline {
                return Ok(vec![]);
            }

            sleep(POLL_INTERVAL).await;
        }
    }

    async fn delete(&self, handle: &DeliveryHandle) -> Result<(), Error> {
        let mut slots = self.slots.lock().await;

        match slots
            .iter()
            .position(|slot| slot.handle.as_deref() == Some(handle.0.as_str()))
        {
            Some(index) => {
                slots.remove(index);
                Ok(())
            }
            None => Err(Error::DeleteFailed(format!(
                "Receipt handle {} is invalid",
                handle.0
            ))),
        }
    }
}
