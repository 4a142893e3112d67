//! # Contest Core Types
//!
//! Layer 0 of the workspace: the plain data every other crate speaks in.
//! Nothing here knows how a contest is analyzed.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::Breed;
pub use error::CoreError;
pub use structs::{Cat, ContestResult, Contestant};
