//! Entity trait implementation for the Product domain type.

use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;

fn validate_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        validate_price(params.price)?;
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            description: params.description,
            expiry: params.expiry,
        })
    }

    /// Price and description are the mutable columns; identity and name are not.
    async fn on_update(&mut self, update: ProductUpdate, _: &()) -> Result<(), ProductError> {
        if let Some(price) = update.price {
            validate_price(price)?;
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _: &()) -> Result<(), ProductError> {
        Ok(())
    }
}
