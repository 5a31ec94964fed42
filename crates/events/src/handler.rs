//! The handler capability invoked by the dispatcher.

use std::sync::Arc;

use crate::error::Result;
use crate::event::DomainEvent;

/// A reaction to one kind of domain event.
///
/// Handlers are shared with the dispatcher as `Arc<dyn EventHandler>`. The
/// `Arc` allocation is the handler's identity: unregistering compares
/// addresses, not values.
pub trait EventHandler: Send + Sync {
    /// Returns a human-readable name used in logs and failure reports.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Reacts to an event.
    fn handle(&self, event: &dyn DomainEvent) -> Result<()>;
}

/// Returns true if both `Arc`s point at the same handler instance.
pub fn is_same_handler<A: ?Sized, B: ?Sized>(a: &Arc<A>, b: &Arc<B>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Adapts a closure into an [`EventHandler`].
pub struct FnHandler<F> {
    name: &'static str,
    f: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&dyn DomainEvent) -> Result<()> + Send + Sync,
{
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> EventHandler for FnHandler<F>
where
    F: Fn(&dyn DomainEvent) -> Result<()> + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn handle(&self, event: &dyn DomainEvent) -> Result<()> {
        (self.f)(event)
    }
}

impl<F> std::fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHandler").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HandlerError;

    struct Silent;

    impl EventHandler for Silent {
        fn handle(&self, _event: &dyn DomainEvent) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn default_name_is_type_name() {
        assert!(Silent.name().ends_with("Silent"));
    }

    #[test]
    fn identity_is_by_allocation() {
        let a: Arc<dyn EventHandler> = Arc::new(Silent);
        let a2 = Arc::clone(&a);
        let b: Arc<dyn EventHandler> = Arc::new(Silent);

        assert!(is_same_handler(&a, &a2));
        assert!(!is_same_handler(&a, &b));
    }

    #[test]
    fn identity_survives_unsizing() {
        let concrete = Arc::new(Silent);
        let erased: Arc<dyn EventHandler> = concrete.clone();
        assert!(is_same_handler(&erased, &concrete));
    }

    #[test]
    fn fn_handler_uses_given_name() {
        let handler = FnHandler::new("failing", |_event: &dyn DomainEvent| {
            Err(HandlerError::failed("boom"))
        });
        assert_eq!(handler.name(), "failing");
    }
}
