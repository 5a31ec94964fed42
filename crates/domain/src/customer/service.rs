//! Customer service: persists customer changes and raises their events.

use std::sync::Arc;

use common::EntityId;
use events::{Event, EventDispatcher};

use super::{Address, AddressData, Customer, CustomerChangedAddress, CustomerCreated};
use crate::error::Result;
use crate::repository::Repository;

/// Command to register a new customer.
#[derive(Debug, Clone)]
pub struct CreateCustomer {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

impl CreateCustomer {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
        }
    }

    /// Sets the free-form description carried on the creation event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Service for managing customers.
///
/// State changes are stored first; the matching event is raised only once
/// the repository has accepted the change.
pub struct CustomerService<R: Repository<Customer>> {
    repository: R,
    dispatcher: Arc<EventDispatcher>,
}

impl<R: Repository<Customer>> CustomerService<R> {
    pub fn new(repository: R, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Registers a customer and raises `CustomerCreatedEvent`.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, cmd: CreateCustomer) -> Result<Customer> {
        let customer = Customer::new(cmd.id, cmd.name)?;
        self.repository.create(&customer).await?;

        self.dispatcher.notify(&Event::new(CustomerCreated {
            id: customer.id().clone(),
            name: customer.name().to_string(),
            description: cmd.description,
        }));
        Ok(customer)
    }

    /// Moves a customer to `address` and raises `CustomerChangedAddressEvent`.
    #[tracing::instrument(skip(self))]
    pub async fn change_address(&self, id: &EntityId, address: Address) -> Result<Customer> {
        let mut customer = self.repository.find(id).await?;
        let data = AddressData::from(&address);
        customer.change_address(address);
        self.repository.update(&customer).await?;

        self.dispatcher.notify(&Event::new(CustomerChangedAddress {
            id: customer.id().clone(),
            name: customer.name().to_string(),
            address: data,
        }));
        Ok(customer)
    }

    #[tracing::instrument(skip(self))]
    pub async fn change_name(&self, id: &EntityId, name: String) -> Result<Customer> {
        let mut customer = self.repository.find(id).await?;
        customer.change_name(name)?;
        self.repository.update(&customer).await?;
        Ok(customer)
    }

    #[tracing::instrument(skip(self))]
    pub async fn activate(&self, id: &EntityId) -> Result<Customer> {
        let mut customer = self.repository.find(id).await?;
        customer.activate()?;
        self.repository.update(&customer).await?;
        Ok(customer)
    }

    #[tracing::instrument(skip(self))]
    pub async fn deactivate(&self, id: &EntityId) -> Result<Customer> {
        let mut customer = self.repository.find(id).await?;
        customer.deactivate();
        self.repository.update(&customer).await?;
        Ok(customer)
    }
}
