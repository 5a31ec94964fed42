//! Product entity, its creation event and handler.

mod entity;
mod events;
mod handlers;
mod service;

pub use entity::Product;
pub use self::events::ProductCreated;
pub use handlers::SendEmailWhenProductIsCreated;
pub use service::{CreateProduct, ProductService};

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("Id is required")]
    IdRequired,

    #[error("Name is required")]
    NameRequired,

    #[error("Price must be greater than zero")]
    InvalidPrice,
}
