//! Shared value types for the shop workspace.

pub mod money;
pub mod types;

pub use money::Money;
pub use types::EntityId;
