//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces to the external database and price source
//! - **Use Cases**: Loading the book and rebuilding the portfolio snapshot

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
