use common::{EntityId, Money};

use super::{OrderError, OrderItem};
use crate::repository::Entity;

/// A customer's order.
///
/// An order always has an ID, a customer and at least one item; item IDs are
/// unique within the order and the total fits in the money range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: EntityId,
    customer_id: EntityId,
    items: Vec<OrderItem>,
    total: Money,
}

impl Order {
    pub fn new(
        id: impl Into<EntityId>,
        customer_id: impl Into<EntityId>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let id = id.into();
        let customer_id = customer_id.into();
        if id.is_empty() {
            return Err(OrderError::IdRequired);
        }
        if customer_id.is_empty() {
            return Err(OrderError::CustomerIdRequired);
        }
        let total = validate_items(&items)?;
        Ok(Self {
            id,
            customer_id,
            items,
            total,
        })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn customer_id(&self) -> &EntityId {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the sum of all item totals.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn add_item(&mut self, item: OrderItem) -> Result<(), OrderError> {
        if self.items.iter().any(|i| i.id() == item.id()) {
            return Err(OrderError::DuplicateItem {
                item_id: item.id().clone(),
            });
        }
        self.total = self
            .total
            .checked_add(item.total())
            .ok_or(OrderError::TotalOverflow)?;
        self.items.push(item);
        Ok(())
    }

    /// Removes an item. The last item cannot be removed.
    pub fn remove_item(&mut self, item_id: &EntityId) -> Result<OrderItem, OrderError> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id() == item_id)
            .ok_or_else(|| OrderError::ItemNotFound {
                item_id: item_id.clone(),
            })?;
        if self.items.len() == 1 {
            return Err(OrderError::ItemsRequired);
        }
        let removed = self.items.remove(pos);
        self.total = Money::from_cents(self.total.cents() - removed.total().cents());
        Ok(removed)
    }

    /// Replaces the whole item list.
    pub fn replace_items(&mut self, items: Vec<OrderItem>) -> Result<(), OrderError> {
        self.total = validate_items(&items)?;
        self.items = items;
        Ok(())
    }
}

/// Checks the item list and returns its total.
fn validate_items(items: &[OrderItem]) -> Result<Money, OrderError> {
    if items.is_empty() {
        return Err(OrderError::ItemsRequired);
    }
    for (i, item) in items.iter().enumerate() {
        if items[..i].iter().any(|other| other.id() == item.id()) {
            return Err(OrderError::DuplicateItem {
                item_id: item.id().clone(),
            });
        }
    }
    Money::checked_sum(items.iter().map(OrderItem::total)).ok_or(OrderError::TotalOverflow)
}

impl Entity for Order {
    fn entity_type() -> &'static str {
        "Order"
    }

    fn id(&self) -> &EntityId {
        &self.id
    }
}
