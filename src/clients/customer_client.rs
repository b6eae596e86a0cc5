//! # Customer Client
//!
//! High-level API for the Customer actor: customer record maintenance.

use crate::customer_actor::CustomerError;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_customer(
        &self,
        params: CustomerCreate,
    ) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(CustomerError::from)
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(CustomerError::from)
    }

    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> Result<Vec<Customer>, CustomerError> {
        debug!("Sending request");
        let mut customers = self.inner.list().await.map_err(CustomerError::from)?;
        customers.sort_by_key(|c| c.id.0);
        Ok(customers)
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CustomerError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    #[tokio::test]
    async fn test_get_returns_scripted_customer() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_get(CustomerId(1))
            .return_ok(Some(Customer::new(CustomerId(1), "Alice", "alice@example.com")));
        let client = CustomerClient::new(mock.client());

        let customer = client.get(CustomerId(1)).await.unwrap().unwrap();
        assert_eq!(customer.name, "Alice");
        mock.verify();
    }

    #[tokio::test]
    async fn test_missing_customer_is_none_not_error() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_get(CustomerId(7)).return_ok(None);
        let client = CustomerClient::new(mock.client());

        assert!(client.get(CustomerId(7)).await.unwrap().is_none());
        mock.verify();
    }
}
