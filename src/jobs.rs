use crate::{
    modules::order::routes::process::{service, types::response},
    types::Context,
};
use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};

async fn process_orders_job(ctx: Arc<Context>) {
    match service::service(ctx).await {
        Ok(response::Success::NothingToProcess) => tracing::debug!("No orders to process"),
        Ok(response::Success::OrdersProcessed(count)) => {
            tracing::info!("Scheduled run processed {} orders", count)
        }
        Err(err) => tracing::error!("Scheduled order processing failed: {}", err),
    }
}

/// Runs the order processor on a fixed period. Returns immediately when no
/// period is configured.
pub async fn monitor(ctx: Arc<Context>) {
    let Some(period) = ctx.app.process_interval else {
        tracing::debug!("Scheduled order processing disabled");
        return;
    };

    run_every(ctx, period).await
}

async fn run_every(ctx: Arc<Context>, period: Duration) {
    tracing::info!("Processing orders every {}s", period.as_secs());

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        process_orders_job(ctx.clone()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        modules::order::model::Order,
        types::AppContext,
        utils::{
            queue::{InMemoryQueue, Queue},
            table::InMemoryTable,
        },
    };

    #[tokio::test]
    async fn monitor_returns_when_disabled() {
        let ctx = Arc::new(Context {
            app: AppContext {
                host: "127.0.0.1".to_string(),
                port: 0,
                process_interval: None,
                receive_wait: Duration::ZERO,
            },
            queue: Arc::new(InMemoryQueue::new()),
            table: Arc::new(InMemoryTable::new()),
        });

        monitor(ctx).await;
    }

    #[tokio::test]
    async fn scheduled_runs_drain_the_queue() {
        let queue = InMemoryQueue::new();
        let table = InMemoryTable::new();
        let order = Order::new("pizza".to_string(), 2);
        queue.enqueue(order.to_message().unwrap()).await.unwrap();

        let ctx = Arc::new(Context {
            app: AppContext {
                host: "127.0.0.1".to_string(),
                port: 0,
                process_interval: Some(Duration::from_millis(10)),
                receive_wait: Duration::ZERO,
            },
            queue: Arc::new(queue.clone()),
            table: Arc::new(table.clone()),
        });

        let job = tokio::spawn(monitor(ctx));
        tokio::time::sleep(Duration::from_millis(200)).await;
        job.abort();

        assert!(queue.is_empty().await);
        assert_eq!(table.get(&order.order_id).await, Some(order));
    }
}
