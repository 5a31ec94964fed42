//! Orders and order items.

mod order;
mod order_item;
mod service;

pub use order::Order;
pub use order_item::OrderItem;
pub use service::OrderService;

use common::EntityId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Id is required")]
    IdRequired,

    #[error("Customer id is required")]
    CustomerIdRequired,

    /// An order must always hold at least one item.
    #[error("Items are required")]
    ItemsRequired,

    #[error("Product id is required")]
    ProductIdRequired,

    #[error("Item name is required")]
    ItemNameRequired,

    #[error("Quantity must be greater than zero")]
    InvalidQuantity,

    #[error("Price must be greater than zero")]
    InvalidPrice,

    #[error("Item not found: {item_id}")]
    ItemNotFound { item_id: EntityId },

    #[error("Item already in order: {item_id}")]
    DuplicateItem { item_id: EntityId },

    /// A line or order total does not fit in the money range.
    #[error("Total is too large")]
    TotalOverflow,

    /// Orders cannot be placed without items.
    #[error("Order must have at least one item")]
    NoItems,
}
