use super::{Error, Table};
use crate::modules::order::model::Order;
use async_trait::async_trait;
use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};
use tokio::sync::Mutex;

#[derive(Default)]
struct State {
    records: HashMap<String, Order>,
    failing: HashSet<String>,
    writes: usize,
}

/// Process-local table. Writes for ids registered with [`InMemoryTable::fail_writes_for`]
/// are rejected until [`InMemoryTable::clear_failures`] is called.
#[derive(Clone, Default)]
pub struct InMemoryTable {
    state: Arc<Mutex<State>>,
}

impl InMemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn fail_writes_for(&self, order_id: impl Into<String>) {
        self.state.lock().await.failing.insert(order_id.into());
    }

    pub async fn clear_failures(&self) {
        self.state.lock().await.failing.clear();
    }

    pub async fn get(&self, order_id: &str) -> Option<Order> {
        self.state.lock().await.records.get(order_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.records.is_empty()
    }

    /// Successful writes so far, overwrites included.
    pub async fn writes(&self) -> usize {
        self.state.lock().await.writes
    }
}

#[async_trait]
impl Table for InMemoryTable {
    async fn put(&self, order: &Order) -> Result<(), Error> {
        let mut state = self.state.lock().await;

        if state.failing.contains(&order.order_id) {
            return Err(Error::PutFailed {
                order_id: order.order_id.clone(),
                reason: "write rejected".to_string(),
            });
        }

        state.records.insert(order.order_id.clone(), order.clone());
        state.writes += 1;
        Ok(())
    }
}
