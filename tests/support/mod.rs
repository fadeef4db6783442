#![allow(dead_code)]

use async_trait::async_trait;
use order_queue_backend_rs::{
    app::App,
    types::{AppContext, Context},
    utils::{
        queue::{self, DeliveryHandle, InMemoryQueue, Queue, ReceivedMessage},
        table::{InMemoryTable, Table},
    },
};
use std::{sync::Arc, time::Duration};

pub struct TestApp {
    pub base: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn post_order(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/orders", self.base))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn process_orders(&self) -> reqwest::Response {
        self.client
            .post(format!("{}/process-orders", self.base))
            .send()
            .await
            .unwrap()
    }
}

/// Queue whose messages are visible again right after a failed run.
pub fn redelivering_queue() -> InMemoryQueue {
    InMemoryQueue::with_visibility_timeout(Duration::ZERO)
}

/// Bind to port 0 and serve the app with the given collaborators.
pub async fn spawn_app(queue: Arc<dyn Queue>, table: Arc<dyn Table>) -> TestApp {
    let ctx = Arc::new(Context {
        app: AppContext {
            host: "127.0.0.1".to_string(),
            port: 0,
            process_interval: None,
            receive_wait: Duration::ZERO,
        },
        queue,
        table,
    });

    let router = App::new(ctx).router();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp {
        base: format!("http://{addr}"),
        client: reqwest::Client::new(),
    }
}

pub async fn spawn_in_memory() -> (TestApp, InMemoryQueue, InMemoryTable) {
    let queue = redelivering_queue();
    let table = InMemoryTable::new();
    let app = spawn_app(Arc::new(queue.clone()), Arc::new(table.clone())).await;
    (app, queue, table)
}

/// Queue that rejects every call.
pub struct UnavailableQueue;

#[async_trait]
impl Queue for UnavailableQueue {
    async fn enqueue(&self, _body: String) -> Result<(), queue::Error> {
        Err(queue::Error::EnqueueFailed("queue unavailable".to_string()))
    }

    async fn receive(
        &self,
        _max_messages: usize,
        _wait: Duration,
    ) -> Result<Vec<ReceivedMessage>, queue::Error> {
        Err(queue::Error::ReceiveFailed("queue unavailable".to_string()))
    }

    async fn delete(&self, _handle: &DeliveryHandle) -> Result<(), queue::Error> {
        Err(queue::Error::DeleteFailed("queue unavailable".to_string()))
    }
}

/// Delivers like the wrapped queue but never accepts a delete.
pub struct UnacknowledgingQueue(pub InMemoryQueue);

#[async_trait]
impl Queue for UnacknowledgingQueue {
    async fn enqueue(&self, body: String) -> Result<(), queue::Error> {
        self.0.enqueue(body).await
    }

    async fn receive(
        &self,
        max_messages: usize,
        wait: Duration,
    ) -> Result<Vec<ReceivedMessage>, queue::Error> {
        self.0.receive(max_messages, wait).await
    }

    async fn delete(&self, _handle: &DeliveryHandle) -> Result<(), queue::Error> {
        Err(queue::Error::DeleteFailed("access denied".to_string()))
    }
}
