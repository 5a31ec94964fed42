use common::{EntityId, Money};

use super::ProductError;
use crate::repository::Entity;

/// A product that can be ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: EntityId,
    name: String,
    price: Money,
}

impl Product {
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::IdRequired);
        }
        if self.name.is_empty() {
            return Err(ProductError::NameRequired);
        }
        if !self.price.is_positive() {
            return Err(ProductError::InvalidPrice);
        }
        Ok(())
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProductError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: Money) -> Result<(), ProductError> {
        if !price.is_positive() {
            return Err(ProductError::InvalidPrice);
        }
        self.price = price;
        Ok(())
    }
}

impl Entity for Product {
    fn entity_type() -> &'static str {
        "Product"
    }

    fn id(&self) -> &EntityId {
        &self.id
    }
}
