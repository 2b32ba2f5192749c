//! # DomainError
//!
//! The core distinguishes two failure classes. Expected anomalies — stale
//! identifiers, vanished posts, out-of-range indices — are *resolution
//! misses* and surface as `None` from the resolver, never as errors.
//! `DomainError` covers the remaining class: snapshot invariant violations,
//! which are defects in the layer that constructed the snapshot.

use thiserror::Error;

/// Invariant violations detectable on a board snapshot.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The same post id appears more than once across the snapshot.
    /// Uniqueness is what lets a bare post id resolve without column
    /// context, so a duplicate makes every resolution ambiguous.
    #[error("duplicate post id {0} in board snapshot")]
    DuplicatePostId(String),

    /// A column's recorded index disagrees with its position in the
    /// snapshot. The index is the join key for droppable identifiers.
    #[error("column index mismatch: column at position {expected} carries index {found}")]
    ColumnIndexMismatch { expected: usize, found: usize },
}

/// A specialized Result type for RetroFlow core logic.
pub type Result<T> = std::result::Result<T, DomainError>;
