//! Customer entity, its events and handlers.

mod address;
mod entity;
mod events;
mod handlers;
mod service;

pub use address::Address;
pub use entity::Customer;
pub use self::events::{AddressData, CustomerChangedAddress, CustomerCreated};
pub use handlers::{
    SendLog1WhenCustomerIsCreated, SendLog2WhenCustomerIsCreated,
    SendLogWhenCustomerChangedAddress,
};
pub use service::{CreateCustomer, CustomerService};

use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    #[error("Id is required")]
    IdRequired,

    #[error("Name is required")]
    NameRequired,

    /// Only customers with an address can be activated.
    #[error("Address is mandatory to activate a customer")]
    AddressRequired,

    /// An address field is missing or out of range.
    #[error("Invalid address: {0} is required")]
    InvalidAddress(&'static str),
}
