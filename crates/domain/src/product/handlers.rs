use events::{DomainEvent, EventHandler, HandlerError};

use super::ProductCreated;

/// Announces new products. Delivery is simulated with a log line.
#[derive(Debug, Default)]
pub struct SendEmailWhenProductIsCreated;

impl EventHandler for SendEmailWhenProductIsCreated {
    fn name(&self) -> &'static str {
        "SendEmailWhenProductIsCreated"
    }

    fn handle(&self, event: &dyn DomainEvent) -> Result<(), HandlerError> {
        let data = event.payload::<ProductCreated>()?;
        tracing::info!(
            product_id = %data.id,
            product_name = %data.name,
            price = %data.price,
            "Sending email to .....@.... .com"
        );
        Ok(())
    }
}
