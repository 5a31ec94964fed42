use common::{EntityId, Money};

use super::OrderError;

/// A line of an order: a product, its unit price and a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    id: EntityId,
    name: String,
    price: Money,
    product_id: EntityId,
    quantity: u32,
    total: Money,
}

impl OrderItem {
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        price: Money,
        product_id: impl Into<EntityId>,
        quantity: u32,
    ) -> Result<Self, OrderError> {
        let mut item = Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
            total: Money::zero(),
        };
        item.validate()?;
        item.total = price
            .checked_multiply(quantity)
            .ok_or(OrderError::TotalOverflow)?;
        Ok(item)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_empty() {
            return Err(OrderError::IdRequired);
        }
        if self.name.is_empty() {
            return Err(OrderError::ItemNameRequired);
        }
        if self.product_id.is_empty() {
            return Err(OrderError::ProductIdRequired);
        }
        if !self.price.is_positive() {
            return Err(OrderError::InvalidPrice);
        }
        if self.quantity == 0 {
            return Err(OrderError::InvalidQuantity);
        }
        Ok(())
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn product_id(&self) -> &EntityId {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns `price * quantity`.
    pub fn total(&self) -> Money {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        let item = OrderItem::new("i1", "Item 1", Money::from_units(100), "p1", 2).unwrap();
        assert_eq!(item.total(), Money::from_units(200));
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        assert_eq!(
            OrderItem::new("i1", "Item 1", Money::from_cents(i64::MAX / 2 + 1), "p1", 2),
            Err(OrderError::TotalOverflow)
        );
        let item = OrderItem::new("i1", "Item 1", Money::from_cents(i64::MAX / 2), "p1", 2).unwrap();
        assert_eq!(item.total().cents(), i64::MAX - 1);
    }

    #[test]
    fn test_quantity_must_be_positive() {
        assert_eq!(
            OrderItem::new("i1", "Item 1", Money::from_units(100), "p1", 0),
            Err(OrderError::InvalidQuantity)
        );
    }

    #[test]
    fn test_price_must_be_positive() {
        assert_eq!(
            OrderItem::new("i1", "Item 1", Money::zero(), "p1", 1),
            Err(OrderError::InvalidPrice)
        );
    }

    #[test]
    fn test_ids_are_required() {
        assert_eq!(
            OrderItem::new("", "Item 1", Money::from_units(1), "p1", 1),
            Err(OrderError::IdRequired)
        );
        assert_eq!(
            OrderItem::new("i1", "Item 1", Money::from_units(1), "", 1),
            Err(OrderError::ProductIdRequired)
        );
    }
}
