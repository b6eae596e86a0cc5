//! Entity trait implementation for the Customer domain type.

use super::error::CustomerError;
use crate::framework::ActorEntity;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, CustomerError> {
        if params.name.trim().is_empty() {
            return Err(CustomerError::MissingField("name"));
        }
        if params.email.trim().is_empty() {
            return Err(CustomerError::MissingField("email"));
        }
        Ok(Customer::new(id, params.name, params.email))
    }

    async fn on_update(&mut self, update: CustomerUpdate, _: &()) -> Result<(), CustomerError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _: &()) -> Result<(), CustomerError> {
        Ok(())
    }
}
