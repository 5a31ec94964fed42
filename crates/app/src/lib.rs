//! Shop bootstrap.
//!
//! Wires one [`EventDispatcher`] into the customer and product services,
//! registers the sample handlers and runs the startup scenario.

pub mod config;
pub mod telemetry;

use std::sync::Arc;

use common::{EntityId, Money};
use domain::{
    Address, CreateCustomer, CreateProduct, Customer, CustomerChangedAddress, CustomerCreated,
    CustomerService, DomainError, InMemoryRepository, Order, OrderItem, OrderService, Product,
    ProductCreated, ProductService, Repository, SendEmailWhenProductIsCreated,
    SendLog1WhenCustomerIsCreated, SendLog2WhenCustomerIsCreated,
    SendLogWhenCustomerChangedAddress,
};
use events::EventDispatcher;
use thiserror::Error;

pub use config::{Config, LogFormat};

/// Errors that can abort the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Registers the sample handlers for every event kind the domain raises.
pub fn register_default_handlers(dispatcher: &EventDispatcher) {
    dispatcher.register_for::<ProductCreated>(Arc::new(SendEmailWhenProductIsCreated));
    dispatcher.register_for::<CustomerCreated>(Arc::new(SendLog1WhenCustomerIsCreated));
    dispatcher.register_for::<CustomerCreated>(Arc::new(SendLog2WhenCustomerIsCreated));
    dispatcher
        .register_for::<CustomerChangedAddress>(Arc::new(SendLogWhenCustomerChangedAddress));
}

/// The wired application: one dispatcher shared by every service.
pub struct Shop {
    pub dispatcher: Arc<EventDispatcher>,
    pub customers: CustomerService<InMemoryRepository<Customer>>,
    pub products: ProductService<InMemoryRepository<Product>>,
    pub orders: InMemoryRepository<Order>,
}

impl Shop {
    /// Creates a shop with empty in-memory storage and no handlers.
    pub fn new() -> Self {
        let dispatcher = Arc::new(EventDispatcher::new());
        Self {
            customers: CustomerService::new(InMemoryRepository::new(), Arc::clone(&dispatcher)),
            products: ProductService::new(InMemoryRepository::new(), Arc::clone(&dispatcher)),
            orders: InMemoryRepository::new(),
            dispatcher,
        }
    }

    /// Creates a shop with the sample handlers registered.
    pub fn with_default_handlers() -> Self {
        let shop = Self::new();
        register_default_handlers(&shop.dispatcher);
        shop
    }

    /// Places an order for a stored customer, persisting the order and the
    /// customer's new reward points.
    pub async fn place_order(
        &self,
        customer_id: &EntityId,
        items: Vec<OrderItem>,
    ) -> Result<Order, DomainError> {
        let repository = self.customers.repository();
        let mut customer = repository.find(customer_id).await?;
        let order = OrderService::place_order(&mut customer, items)?;
        self.orders.create(&order).await?;
        repository.update(&customer).await?;
        Ok(order)
    }
}

impl Default for Shop {
    fn default() -> Self {
        Self::new()
    }
}

/// What the startup scenario produced.
#[derive(Debug, Clone)]
pub struct Summary {
    pub customer: Customer,
    pub order: Order,
}

/// Runs the startup scenario: stocks two products, registers and activates a
/// customer, and places an order for both products.
#[tracing::instrument(skip(shop))]
pub async fn run(shop: &Shop) -> Result<Summary, AppError> {
    let p1 = shop
        .products
        .create(
            CreateProduct::new("p1", "Item 1", Money::from_units(10))
                .with_description("Item 1 description"),
        )
        .await?;
    let p2 = shop
        .products
        .create(
            CreateProduct::new("p2", "Item 2", Money::from_units(15))
                .with_description("Item 2 description"),
        )
        .await?;

    let customer_id = EntityId::new("123");
    shop.customers
        .create(
            CreateCustomer::new(customer_id.clone(), "Luciano Fronza")
                .with_description("Customer created at startup"),
        )
        .await?;
    let address = Address::new("Rua das Flores", 23, "88037-518", "Carlos Barbosa")
        .map_err(DomainError::from)?;
    shop.customers.change_address(&customer_id, address).await?;
    shop.customers.activate(&customer_id).await?;

    let items = vec![
        OrderItem::new("1", p1.name(), p1.price(), p1.id().clone(), 1)
            .map_err(DomainError::from)?,
        OrderItem::new("2", p2.name(), p2.price(), p2.id().clone(), 1)
            .map_err(DomainError::from)?,
    ];
    let order = shop.place_order(&customer_id, items).await?;
    let customer = shop
        .customers
        .repository()
        .find(&customer_id)
        .await
        .map_err(DomainError::from)?;

    tracing::info!(
        order_id = %order.id(),
        total = %order.total(),
        reward_points = customer.reward_points(),
        "startup scenario complete"
    );
    Ok(Summary { customer, order })
}
