//! Domain events and their payloads.

use std::any::Any;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::HandlerError;

/// Unique identifier for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random event ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The data carried by one kind of event.
///
/// Each payload type names its event kind through [`EventPayload::EVENT_TYPE`];
/// that name is the key the dispatcher routes on. Payloads should be named in
/// past tense, after the fact they describe.
pub trait EventPayload: Serialize + std::fmt::Debug + Send + Sync + 'static {
    /// The routing name for events carrying this payload.
    const EVENT_TYPE: &'static str;
}

/// An immutable record of something that happened in the domain.
#[derive(Debug, Clone, Serialize)]
pub struct Event<P: EventPayload> {
    event_id: EventId,
    occurred_at: DateTime<Utc>,
    data: P,
}

impl<P: EventPayload> Event<P> {
    /// Creates an event stamped with the current time.
    pub fn new(data: P) -> Self {
        Self {
            event_id: EventId::new(),
            occurred_at: Utc::now(),
            data,
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn event_type(&self) -> &'static str {
        P::EVENT_TYPE
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn data(&self) -> &P {
        &self.data
    }
}

/// Object-safe view of an event, as seen by the dispatcher and handlers.
///
/// The dispatcher only ever reads [`DomainEvent::event_type`]; the payload
/// stays opaque to it. Handlers recover the typed payload with
/// `event.payload::<P>()`.
pub trait DomainEvent: std::fmt::Debug + Send + Sync + 'static {
    fn event_id(&self) -> EventId;

    /// Returns the routing name of this event's kind.
    fn event_type(&self) -> &'static str;

    fn occurred_at(&self) -> DateTime<Utc>;

    /// Returns the payload rendered as JSON, for logging and inspection.
    fn data_json(&self) -> Result<serde_json::Value, serde_json::Error>;

    fn as_any(&self) -> &dyn Any;
}

impl<P: EventPayload> DomainEvent for Event<P> {
    fn event_id(&self) -> EventId {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        P::EVENT_TYPE
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn data_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(&self.data)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn DomainEvent {
    /// Returns the concrete event if it carries a `P` payload.
    pub fn downcast_ref<P: EventPayload>(&self) -> Option<&Event<P>> {
        self.as_any().downcast_ref::<Event<P>>()
    }

    /// Returns the typed payload, or [`HandlerError::UnexpectedEvent`] if
    /// this event is of another kind.
    pub fn payload<P: EventPayload>(&self) -> Result<&P, HandlerError> {
        self.downcast_ref::<P>()
            .map(Event::data)
            .ok_or(HandlerError::UnexpectedEvent {
                expected: P::EVENT_TYPE,
                actual: self.event_type(),
            })
    }
}
