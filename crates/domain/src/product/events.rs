use common::{EntityId, Money};
use events::EventPayload;
use serde::{Deserialize, Serialize};

/// A product was added to the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub price: Money,
}

impl EventPayload for ProductCreated {
    const EVENT_TYPE: &'static str = "ProductCreatedEvent";
}
