//! # Order Client
//!
//! High-level API for the Order actor: `place_order` and read access for
//! reporting. There is intentionally no update or cancel surface; orders are
//! append-only facts.

use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Place an order. On success the returned id refers to a fully priced,
    /// stock-reserved, paid order; on failure nothing was recorded anywhere.
    #[instrument(skip(self, params), fields(customer_id = %params.customer_id))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(line_count = params.lines.len(), "Placing order");
        self.inner.create(params).await.map_err(OrderError::from)
    }

    /// Every placed order, sorted by id (placement sequence).
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders = self.inner.list().await.map_err(OrderError::from)?;
        orders.sort_by_key(|o| o.id);
        Ok(orders)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
