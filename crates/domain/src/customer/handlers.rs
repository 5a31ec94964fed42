//! Sample reactions to customer events. They only log.

use events::{DomainEvent, EventHandler, HandlerError};

use super::{CustomerChangedAddress, CustomerCreated};

/// Logs a first message when a customer is created.
#[derive(Debug, Default)]
pub struct SendLog1WhenCustomerIsCreated;

impl EventHandler for SendLog1WhenCustomerIsCreated {
    fn name(&self) -> &'static str {
        "SendLog1WhenCustomerIsCreated"
    }

    fn handle(&self, event: &dyn DomainEvent) -> Result<(), HandlerError> {
        let data = event.payload::<CustomerCreated>()?;
        tracing::info!(
            customer_id = %data.id,
            "This is the first log presented when creating the customer."
        );
        Ok(())
    }
}

/// Logs a second message when a customer is created.
#[derive(Debug, Default)]
pub struct SendLog2WhenCustomerIsCreated;

impl EventHandler for SendLog2WhenCustomerIsCreated {
    fn name(&self) -> &'static str {
        "SendLog2WhenCustomerIsCreated"
    }

    fn handle(&self, event: &dyn DomainEvent) -> Result<(), HandlerError> {
        let data = event.payload::<CustomerCreated>()?;
        tracing::info!(
            customer_id = %data.id,
            "This is the second log presented when creating the customer."
        );
        Ok(())
    }
}

/// Logs the new address when a customer moves.
#[derive(Debug, Default)]
pub struct SendLogWhenCustomerChangedAddress;

impl EventHandler for SendLogWhenCustomerChangedAddress {
    fn name(&self) -> &'static str {
        "SendLogWhenCustomerChangedAddress"
    }

    fn handle(&self, event: &dyn DomainEvent) -> Result<(), HandlerError> {
        let data = event.payload::<CustomerChangedAddress>()?;
        tracing::info!(
            customer_id = %data.id,
            customer_name = %data.name,
            street = %data.address.street,
            number = data.address.number,
            zipcode = %data.address.zipcode,
            city = %data.address.city,
            occurred_at = %event.occurred_at(),
            "The customer's address has changed."
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::EntityId;
    use events::Event;

    use crate::customer::AddressData;

    fn created() -> Event<CustomerCreated> {
        Event::new(CustomerCreated {
            id: EntityId::new("1"),
            name: "Customer 1".to_string(),
            description: "Customer 1 description".to_string(),
        })
    }

    #[test]
    fn test_created_handlers_accept_created_event() {
        let event = created();
        assert!(SendLog1WhenCustomerIsCreated.handle(&event).is_ok());
        assert!(SendLog2WhenCustomerIsCreated.handle(&event).is_ok());
    }

    #[test]
    fn test_changed_address_handler_rejects_other_kinds() {
        let err = SendLogWhenCustomerChangedAddress
            .handle(&created())
            .unwrap_err();
        assert!(matches!(err, HandlerError::UnexpectedEvent { .. }));
    }

    #[test]
    fn test_changed_address_handler_accepts_its_event() {
        let event = Event::new(CustomerChangedAddress {
            id: EntityId::new("123"),
            name: "Customer 1".to_string(),
            address: AddressData {
                street: "Rua 1".to_string(),
                number: 10,
                zipcode: "88.056-256".to_string(),
                city: "Cidade 1".to_string(),
            },
        });
        assert!(SendLogWhenCustomerChangedAddress.handle(&event).is_ok());
    }
}
