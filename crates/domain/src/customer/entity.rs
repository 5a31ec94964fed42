use common::EntityId;

use super::{Address, CustomerError};
use crate::repository::Entity;

/// A customer of the shop.
///
/// Customers start inactive with no address and no reward points. Every
/// mutation is validated before it is applied, so a `Customer` value always
/// satisfies its invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: EntityId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.is_empty() {
            return Err(CustomerError::IdRequired);
        }
        if self.name.is_empty() {
            return Err(CustomerError::NameRequired);
        }
        Ok(())
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Renames the customer. The name must not be empty.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CustomerError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Activates the customer. Requires an address.
    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }
}

impl Entity for Customer {
    fn entity_type() -> &'static str {
        "Customer"
    }

    fn id(&self) -> &EntityId {
        &self.id
    }
}
