pub use crate::utils::config::Config;
use crate::utils::{
    config::{AwsConfig, Backend},
    queue::{InMemoryQueue, Queue, SqsQueue},
    table::{DynamoTable, InMemoryTable, Table},
};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sqs::config::Region;
use std::{sync::Arc, time::Duration};

/// How long a processing run waits for the queue to produce messages.
pub const DEFAULT_RECEIVE_WAIT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
    pub process_interval: Option<Duration>,
    pub receive_wait: Duration,
}

/// Shared handles passed to every handler and job.
#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub queue: Arc<dyn Queue>,
    pub table: Arc<dyn Table>,
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

async fn aws_collaborators(aws: AwsConfig) -> (Arc<dyn Queue>, Arc<dyn Table>) {
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(aws.region.clone()))
        .load()
        .await;

    tracing::debug!(
        "Using queue {} and table {} in {}",
        aws.queue_url,
        aws.table_name,
        aws.region
    );

    let queue: Arc<dyn Queue> = Arc::new(SqsQueue::new(
        aws_sdk_sqs::Client::new(&sdk_config),
        aws.queue_url,
    ));
    let table: Arc<dyn Table> = Arc::new(DynamoTable::new(
        aws_sdk_dynamodb::Client::new(&sdk_config),
        aws.table_name,
    ));

    (queue, table)
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let (queue, table) = match self.backend {
            Backend::Aws(aws) => aws_collaborators(aws).await,
            Backend::InMemory => {
                tracing::warn!("Using the in-memory queue and table, orders are not durable");
                let queue: Arc<dyn Queue> = Arc::new(InMemoryQueue::new());
                let table: Arc<dyn Table> = Arc::new(InMemoryTable::new());
                (queue, table)
            }
        };

        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
                process_interval: self.app.process_interval,
                receive_wait: DEFAULT_RECEIVE_WAIT,
            },
            queue,
            table,
        }
    }
}
