//! Entity trait implementation for the Order domain type.
//!
//! Placement runs in two phases. `from_create_params` validates the cart
//! shape synchronously (no other actor consulted, nothing to roll back on
//! failure). `on_create` then orchestrates against the customer, product,
//! and warehouse actors; the order is only inserted into the store after
//! the hook succeeds, and the reserve is the single side-effecting step,
//! so a failure at any point leaves no partial order and no lost stock.

use super::error::OrderError;
use crate::clients::{CustomerClient, ProductClient, WarehouseClient};
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{CartLine, Order, OrderCreate, OrderId, OrderItem, Payment};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use tracing::info;

/// Dependencies the Order actor needs to place an order.
pub type OrderContext = (CustomerClient, ProductClient, WarehouseClient);

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = OrderContext;
    type Error = OrderError;

    /// Cart-shape validation: non-empty, every quantity at least 1, no
    /// product listed twice. Items are built with a placeholder price and
    /// sorted by product id; `on_create` fills in catalog prices.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        let mut seen = HashSet::new();
        for line in &params.lines {
            if line.quantity == 0 {
                return Err(OrderError::InvalidQuantity(line.product_id));
            }
            if !seen.insert(line.product_id) {
                return Err(OrderError::DuplicateProduct(line.product_id));
            }
        }

        let mut lines = params.lines;
        lines.sort_by_key(|l| l.product_id);
        let created_at = Utc::now();

        Ok(Self {
            id,
            customer_id: params.customer_id,
            warehouse_id: params.warehouse_id,
            created_at,
            items: lines
                .into_iter()
                .map(|l| OrderItem {
                    product_id: l.product_id,
                    quantity: l.quantity,
                    unit_price: 0.0,
                })
                .collect(),
            total: 0.0,
            payment: Payment {
                amount: 0.0,
                paid_at: created_at.date_naive(),
            },
        })
    }

    /// Placement orchestration: resolve the customer, price every line from
    /// the catalog, reserve stock atomically, then record total and payment.
    /// Errors before the reserve change nothing anywhere; the reserve itself
    /// is all-or-nothing inside the warehouse actor.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let (customers, products, warehouses) = ctx;

        customers
            .get(self.customer_id)
            .await?
            .ok_or(OrderError::UnknownCustomer(self.customer_id))?;

        for item in &mut self.items {
            let product = products
                .get(item.product_id)
                .await?
                .ok_or(OrderError::UnknownProduct(item.product_id))?;
            item.unit_price = product.price;
        }

        let lines: Vec<CartLine> = self
            .items
            .iter()
            .map(|i| CartLine {
                product_id: i.product_id,
                quantity: i.quantity,
            })
            .collect();
        warehouses.reserve(self.warehouse_id, lines).await?;

        self.total = self
            .items
            .iter()
            .map(|i| i.unit_price * f64::from(i.quantity))
            .sum();
        self.payment = Payment {
            amount: self.total,
            paid_at: Utc::now().date_naive(),
        };

        info!(
            order_id = %self.id,
            customer_id = %self.customer_id,
            total = self.total,
            "Order placed"
        );
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _: &OrderContext) -> Result<(), OrderError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _: &OrderContext) -> Result<(), OrderError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::model::{Customer, CustomerId, Product, ProductId, Warehouse, WarehouseId};
    use crate::warehouse_actor::{InventoryError, WarehouseActionResult};

    fn cart(lines: Vec<CartLine>) -> OrderCreate {
        OrderCreate {
            customer_id: CustomerId(1),
            warehouse_id: WarehouseId(1),
            lines,
        }
    }

    #[test]
    fn rejects_empty_cart() {
        let err = Order::from_create_params(OrderId(1), cart(vec![])).unwrap_err();
        assert!(matches!(err, OrderError::EmptyCart));
    }

    #[test]
    fn rejects_zero_quantity_line() {
        let params = cart(vec![CartLine {
            product_id: ProductId(2),
            quantity: 0,
        }]);
        let err = Order::from_create_params(OrderId(1), params).unwrap_err();
        assert!(matches!(err, OrderError::InvalidQuantity(ProductId(2))));
    }

    #[test]
    fn rejects_duplicate_product_lines() {
        let params = cart(vec![
            CartLine {
                product_id: ProductId(5),
                quantity: 1,
            },
            CartLine {
                product_id: ProductId(5),
                quantity: 2,
            },
        ]);
        let err = Order::from_create_params(OrderId(1), params).unwrap_err();
        assert!(matches!(err, OrderError::DuplicateProduct(ProductId(5))));
    }

    #[test]
    fn items_are_sorted_by_product_id() {
        let params = cart(vec![
            CartLine {
                product_id: ProductId(9),
                quantity: 1,
            },
            CartLine {
                product_id: ProductId(2),
                quantity: 3,
            },
        ]);
        let order = Order::from_create_params(OrderId(1), params).unwrap();
        let ids: Vec<ProductId> = order.items.iter().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![ProductId(2), ProductId(9)]);
    }

    fn context(
        customers: &MockClient<Customer>,
        products: &MockClient<Product>,
        warehouses: &MockClient<Warehouse>,
    ) -> OrderContext {
        (
            CustomerClient::new(customers.client()),
            ProductClient::new(products.client()),
            WarehouseClient::new(warehouses.client()),
        )
    }

    #[tokio::test]
    async fn on_create_prices_reserves_and_records_payment() {
        let mut customers = MockClient::<Customer>::new();
        customers
            .expect_get(CustomerId(1))
            .return_ok(Some(Customer::new(CustomerId(1), "Alice", "alice@example.com")));
        let mut products = MockClient::<Product>::new();
        products.expect_get(ProductId(2)).return_ok(Some(Product {
            id: ProductId(2),
            name: "Milk 1L".to_string(),
            price: 30.0,
            description: None,
            expiry: None,
        }));
        let mut warehouses = MockClient::<Warehouse>::new();
        warehouses
            .expect_action(WarehouseId(1))
            .return_ok(WarehouseActionResult::Reserve(()));
        let ctx = context(&customers, &products, &warehouses);

        let mut order = Order::from_create_params(
            OrderId(1),
            cart(vec![CartLine {
                product_id: ProductId(2),
                quantity: 4,
            }]),
        )
        .unwrap();
        order.on_create(&ctx).await.unwrap();

        assert_eq!(order.items[0].unit_price, 30.0);
        assert_eq!(order.total, 120.0);
        assert_eq!(order.payment.amount, 120.0);
        customers.verify();
        products.verify();
        warehouses.verify();
    }

    #[tokio::test]
    async fn on_create_surfaces_the_ledger_shortfall() {
        let mut customers = MockClient::<Customer>::new();
        customers
            .expect_get(CustomerId(1))
            .return_ok(Some(Customer::new(CustomerId(1), "Alice", "alice@example.com")));
        let mut products = MockClient::<Product>::new();
        products.expect_get(ProductId(2)).return_ok(Some(Product {
            id: ProductId(2),
            name: "Milk 1L".to_string(),
            price: 30.0,
            description: None,
            expiry: None,
        }));
        let mut warehouses = MockClient::<Warehouse>::new();
        warehouses.expect_action(WarehouseId(1)).return_err(
            FrameworkError::EntityError(Box::new(InventoryError::InsufficientStock {
                product: ProductId(2),
                requested: 4,
                available: 1,
            })),
        );
        let ctx = context(&customers, &products, &warehouses);

        let mut order = Order::from_create_params(
            OrderId(1),
            cart(vec![CartLine {
                product_id: ProductId(2),
                quantity: 4,
            }]),
        )
        .unwrap();
        let err = order.on_create(&ctx).await.unwrap_err();

        assert!(matches!(
            err,
            OrderError::InsufficientStock {
                product: ProductId(2),
                requested: 4,
                available: 1,
            }
        ));
    }

    #[tokio::test]
    async fn on_create_rejects_unknown_customer_before_any_lookup() {
        let mut customers = MockClient::<Customer>::new();
        customers.expect_get(CustomerId(1)).return_ok(None);
        let products = MockClient::<Product>::new();
        let warehouses = MockClient::<Warehouse>::new();
        let ctx = context(&customers, &products, &warehouses);

        let mut order = Order::from_create_params(
            OrderId(1),
            cart(vec![CartLine {
                product_id: ProductId(2),
                quantity: 1,
            }]),
        )
        .unwrap();
        let err = order.on_create(&ctx).await.unwrap_err();

        assert!(matches!(err, OrderError::UnknownCustomer(CustomerId(1))));
        // Neither the catalog nor the ledger was consulted.
        products.verify();
        warehouses.verify();
    }
}
