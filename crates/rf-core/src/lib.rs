//! retroflow/crates/rf-core/src/lib.rs
//!
//! The central domain logic for RetroFlow: the board snapshot model, its
//! lookup surface, and the gesture resolver that turns drag-and-drop
//! identifiers into move/combine operation descriptors.

pub mod error;
pub mod gesture;
pub mod lookup;
pub mod models;
pub mod resolver;

// Re-exporting for easier access in other crates
pub use error::*;
pub use gesture::*;
pub use lookup::*;
pub use models::*;
pub use resolver::*;
