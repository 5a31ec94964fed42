//! Domain error types.

use thiserror::Error;

use crate::checkout::OrderError;
use crate::customer::CustomerError;
use crate::product::ProductError;
use crate::repository::RepositoryError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A customer invariant was violated.
    #[error("Customer error: {0}")]
    Customer(#[from] CustomerError),

    /// A product invariant was violated.
    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    /// An order invariant was violated.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// The repository rejected the operation.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
