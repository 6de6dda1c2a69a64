//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod money;
mod symbol;
mod timestamp;

pub use money::Money;
pub use symbol::Symbol;
pub use timestamp::Timestamp;
