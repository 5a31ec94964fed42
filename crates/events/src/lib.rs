//! In-process domain event dispatching.
//!
//! This crate provides:
//! - [`EventPayload`] and [`Event`] for immutable, kind-named domain events
//! - [`DomainEvent`], the object-safe view handlers receive
//! - [`EventHandler`] for side-effecting reactions to events
//! - [`EventDispatcher`], the registry that maps event type names to ordered
//!   handler lists and fans each event out synchronously

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;

pub use dispatcher::{DispatchReport, EventDispatcher, HandlerFailure, HandlerMap};
pub use error::{HandlerError, Result};
pub use event::{DomainEvent, Event, EventId, EventPayload};
pub use handler::{EventHandler, FnHandler, is_same_handler};
