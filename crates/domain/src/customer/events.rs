//! Customer domain events.

use common::EntityId;
use events::EventPayload;
use serde::{Deserialize, Serialize};

use super::Address;

/// A customer was registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreated {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

impl EventPayload for CustomerCreated {
    const EVENT_TYPE: &'static str = "CustomerCreatedEvent";
}

/// Address fields as carried on the wire by customer events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressData {
    pub street: String,
    pub number: u32,
    pub zipcode: String,
    pub city: String,
}

impl From<&Address> for AddressData {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street().to_string(),
            number: address.number(),
            zipcode: address.zip().to_string(),
            city: address.city().to_string(),
        }
    }
}

/// A customer's address was changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerChangedAddress {
    pub id: EntityId,
    pub name: String,
    pub address: AddressData,
}

impl EventPayload for CustomerChangedAddress {
    const EVENT_TYPE: &'static str = "CustomerChangedAddressEvent";
}
