//! Domain layer for the shop.
//!
//! This crate provides:
//! - Customer, Product and Order entities with their validation rules
//! - The domain events they raise and the sample handlers reacting to them
//! - Repository trait with an in-memory implementation
//! - Services that persist state changes and notify the event dispatcher

pub mod checkout;
pub mod customer;
pub mod error;
pub mod product;
pub mod repository;

pub use checkout::{Order, OrderError, OrderItem, OrderService};
pub use customer::{
    Address, AddressData, CreateCustomer, Customer, CustomerChangedAddress, CustomerCreated,
    CustomerError, CustomerService, SendLog1WhenCustomerIsCreated, SendLog2WhenCustomerIsCreated,
    SendLogWhenCustomerChangedAddress,
};
pub use error::DomainError;
pub use product::{
    CreateProduct, Product, ProductCreated, ProductError, ProductService,
    SendEmailWhenProductIsCreated,
};
pub use repository::{Entity, InMemoryRepository, Repository, RepositoryError};
