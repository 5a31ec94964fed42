//! The event dispatcher: a registry of handlers keyed by event type name.

use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::HandlerError;
use crate::event::{DomainEvent, EventPayload};
use crate::handler::{EventHandler, is_same_handler};

/// Mapping from event type name to the handlers registered for it, in
/// registration order.
pub type HandlerMap = HashMap<String, Vec<Arc<dyn EventHandler>>>;

/// A handler that did not complete while reacting to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFailure {
    /// Name of the failing handler.
    pub handler: &'static str,

    /// What went wrong.
    pub error: HandlerError,
}

/// Outcome of a single [`EventDispatcher::notify`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// The event type that was dispatched.
    pub event_type: &'static str,

    /// Number of handlers that completed successfully.
    pub delivered: usize,

    /// Handlers that failed, in invocation order.
    pub failures: Vec<HandlerFailure>,
}

impl DispatchReport {
    fn new(event_type: &'static str) -> Self {
        Self {
            event_type,
            delivered: 0,
            failures: Vec::new(),
        }
    }

    /// Returns the number of handlers that were invoked.
    pub fn invoked(&self) -> usize {
        self.delivered + self.failures.len()
    }

    /// Returns true if no handler failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Routes domain events to the handlers registered for their type.
///
/// The dispatcher is an explicitly owned object: construct one at startup and
/// share it (usually behind an `Arc`) with whatever needs to register handlers
/// or raise events. All operations take `&self` and are safe to call from
/// several threads.
///
/// `notify` copies the handler list for the event's type before invoking
/// anything, so the registry lock is never held while user code runs. A
/// handler may register or unregister handlers from inside `handle`; the
/// change takes effect on the next `notify`.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: RwLock<HandlerMap>,
}

impl EventDispatcher {
    /// Creates a dispatcher with no registered handlers.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HandlerMap> {
        self.handlers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HandlerMap> {
        self.handlers.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `handler` to the list for `event_type`, creating the list if
    /// needed. Registering the same handler twice adds a second entry.
    pub fn register(&self, event_type: impl Into<String>, handler: Arc<dyn EventHandler>) {
        let event_type = event_type.into();
        tracing::debug!(%event_type, handler = handler.name(), "registering event handler");
        self.write().entry(event_type).or_default().push(handler);
    }

    /// Registers `handler` under the routing name of payload kind `P`.
    pub fn register_for<P: EventPayload>(&self, handler: Arc<dyn EventHandler>) {
        self.register(P::EVENT_TYPE, handler);
    }

    /// Removes the first registration of `handler` for `event_type`.
    ///
    /// The event type stays in the mapping even when its list becomes empty.
    /// Unknown event types and handlers are ignored.
    pub fn unregister<H: EventHandler + ?Sized>(&self, event_type: &str, handler: &Arc<H>) {
        let mut handlers = self.write();
        let Some(list) = handlers.get_mut(event_type) else {
            return;
        };
        if let Some(pos) = list.iter().position(|h| is_same_handler(h, handler)) {
            let removed = list.remove(pos);
            tracing::debug!(event_type, handler = removed.name(), "unregistered event handler");
        }
    }

    /// Removes every event type and handler.
    pub fn unregister_all(&self) {
        let mut handlers = self.write();
        tracing::debug!(event_types = handlers.len(), "unregistering all event handlers");
        handlers.clear();
    }

    /// Delivers `event` to every handler registered for its type, in
    /// registration order, on the calling thread.
    ///
    /// A handler returning an error or panicking does not stop delivery to
    /// the handlers after it; each failure is logged and collected in the
    /// returned report.
    #[tracing::instrument(skip(self, event), fields(event_type = event.event_type(), event_id = %event.event_id()))]
    pub fn notify(&self, event: &dyn DomainEvent) -> DispatchReport {
        let event_type = event.event_type();
        let handlers = self.read().get(event_type).cloned().unwrap_or_default();

        metrics::counter!("events_dispatched_total", "event_type" => event_type).increment(1);

        let mut report = DispatchReport::new(event_type);
        for handler in handlers {
            metrics::counter!("event_handler_invocations_total", "event_type" => event_type)
                .increment(1);

            match invoke(handler.as_ref(), event) {
                Ok(()) => report.delivered += 1,
                Err(error) => {
                    tracing::warn!(handler = handler.name(), %error, "event handler failed");
                    metrics::counter!("event_handler_failures_total", "event_type" => event_type)
                        .increment(1);
                    report.failures.push(HandlerFailure {
                        handler: handler.name(),
                        error,
                    });
                }
            }
        }

        tracing::trace!(
            delivered = report.delivered,
            failed = report.failures.len(),
            "event dispatched"
        );
        report
    }

    /// Returns a read guard over the live handler mapping.
    ///
    /// Other dispatcher calls from the same thread block (or deadlock) while
    /// the guard is held; drop it before registering or notifying.
    pub fn event_handlers(&self) -> RwLockReadGuard<'_, HandlerMap> {
        self.read()
    }

    /// Returns the handlers for `event_type`, or `None` if the type has no
    /// entry at all. An entry emptied by [`unregister`](Self::unregister)
    /// yields `Some(vec![])`.
    pub fn handlers_for(&self, event_type: &str) -> Option<Vec<Arc<dyn EventHandler>>> {
        self.read().get(event_type).cloned()
    }

    /// Returns true if `event_type` has an entry, even an empty one.
    pub fn contains_event_type(&self, event_type: &str) -> bool {
        self.read().contains_key(event_type)
    }

    /// Returns the number of handlers registered for `event_type`.
    pub fn handler_count(&self, event_type: &str) -> usize {
        self.read().get(event_type).map_or(0, Vec::len)
    }

    /// Returns true if no event type has an entry.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let handlers = self.read();
        let mut map = f.debug_map();
        for (event_type, list) in handlers.iter() {
            let names: Vec<&'static str> = list.iter().map(|h| h.name()).collect();
            map.entry(event_type, &names);
        }
        map.finish()
    }
}

fn invoke(handler: &dyn EventHandler, event: &dyn DomainEvent) -> Result<(), HandlerError> {
    panic::catch_unwind(AssertUnwindSafe(|| handler.handle(event)))
        .unwrap_or_else(|payload| Err(HandlerError::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
