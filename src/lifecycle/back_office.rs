use crate::clients::{CustomerClient, FleetClient, OrderClient, ProductClient, WarehouseClient};
use crate::report::SalesReporter;
use tracing::{error, info};

/// The runtime orchestrator for the back office.
///
/// Creates every actor, wires their dependencies, and owns the task handles
/// for graceful shutdown. Dependencies are injected at `run()` time rather
/// than construction time, so the wiring is acyclic: the order actor receives
/// clones of the customer, product, and warehouse clients, and nothing
/// depends on the order actor except callers and the reporter.
///
/// # Example
///
/// ```ignore
/// let system = BackOffice::new();
/// let id = system.order_client.place_order(params).await?;
/// system.shutdown().await?;
/// ```
pub struct BackOffice {
    pub product_client: ProductClient,
    pub customer_client: CustomerClient,
    pub warehouse_client: WarehouseClient,
    pub order_client: OrderClient,
    pub fleet_client: FleetClient,
    pub reporter: SalesReporter,

    /// Task handles for all running actors, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BackOffice {
    /// Creates and starts the whole system: one actor per resource plus the
    /// fleet actor, each in its own task, with the order actor's context
    /// injected at spawn time.
    pub fn new() -> Self {
        let (product_actor, product_inner) = crate::product_actor::new();
        let (customer_actor, customer_inner) = crate::customer_actor::new();
        let (warehouse_actor, warehouse_inner) = crate::warehouse_actor::new();
        let (order_actor, order_inner) = crate::order_actor::new();
        let (fleet_actor, fleet_client) = crate::fleet_actor::new();

        let product_client = ProductClient::new(product_inner);
        let customer_client = CustomerClient::new(customer_inner);
        let warehouse_client = WarehouseClient::new(warehouse_inner);
        let order_client = OrderClient::new(order_inner);

        let product_handle = tokio::spawn(product_actor.run(()));
        let customer_handle = tokio::spawn(customer_actor.run(()));
        let warehouse_handle = tokio::spawn(warehouse_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run((
            customer_client.clone(),
            product_client.clone(),
            warehouse_client.clone(),
        )));
        let fleet_handle = tokio::spawn(fleet_actor.run());

        let reporter = SalesReporter::new(
            order_client.clone(),
            customer_client.clone(),
            warehouse_client.clone(),
        );

        Self {
            product_client,
            customer_client,
            warehouse_client,
            order_client,
            fleet_client,
            reporter,
            handles: vec![
                product_handle,
                customer_handle,
                warehouse_handle,
                order_handle,
                fleet_handle,
            ],
        }
    }

    /// Gracefully shuts down the system: drop every client (closing the
    /// actors' channels), then await all actor tasks.
    ///
    /// The order actor holds clones of the customer, product, and warehouse
    /// clients in its context; those drop when it exits, which is what
    /// finally closes the channels of the actors it depends on. The
    /// dependency graph is acyclic, so this cascade always terminates.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.reporter);
        drop(self.order_client);
        drop(self.fleet_client);
        drop(self.product_client);
        drop(self.customer_client);
        drop(self.warehouse_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {e:?}"));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for BackOffice {
    fn default() -> Self {
        Self::new()
    }
}
