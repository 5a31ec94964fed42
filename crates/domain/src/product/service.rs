use std::sync::Arc;

use common::{EntityId, Money};
use events::{Event, EventDispatcher};

use super::{Product, ProductCreated};
use crate::error::Result;
use crate::repository::Repository;

/// Command to add a product to the catalogue.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub price: Money,
}

impl CreateProduct {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Service for managing the product catalogue.
pub struct ProductService<R: Repository<Product>> {
    repository: R,
    dispatcher: Arc<EventDispatcher>,
}

impl<R: Repository<Product>> ProductService<R> {
    pub fn new(repository: R, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Adds a product and raises `ProductCreatedEvent`.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, cmd: CreateProduct) -> Result<Product> {
        let product = Product::new(cmd.id, cmd.name, cmd.price)?;
        self.repository.create(&product).await?;

        self.dispatcher.notify(&Event::new(ProductCreated {
            id: product.id().clone(),
            name: product.name().to_string(),
            description: cmd.description,
            price: product.price(),
        }));
        Ok(product)
    }

    #[tracing::instrument(skip(self))]
    pub async fn change_price(&self, id: &EntityId, price: Money) -> Result<Product> {
        let mut product = self.repository.find(id).await?;
        product.change_price(price)?;
        self.repository.update(&product).await?;
        Ok(product)
    }
}
