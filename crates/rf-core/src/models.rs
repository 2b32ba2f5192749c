//! # Domain Models
//!
//! These structs represent the core entities of a RetroFlow board snapshot.
//! Identifiers are opaque strings minted by the transport/session layer;
//! the core never generates them.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

/// A session participant, used for authorship and votes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
}

/// A single sticky note. Belongs to exactly one column directly, or to
/// exactly one group, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub content: String,
    pub author: Participant,
    /// Participants who up-voted this post.
    pub likes: Vec<Participant>,
    /// Participants who down-voted this post.
    pub dislikes: Vec<Participant>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Net vote score (likes minus dislikes), used for display ordering.
    pub fn score(&self) -> i64 {
        self.likes.len() as i64 - self.dislikes.len() as i64
    }
}

/// A labeled cluster of posts nested inside one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostGroup {
    pub id: String,
    pub label: String,
    /// Ordered for display; order only affects index bookkeeping.
    pub posts: Vec<Post>,
}

/// A top-level lane. `index` is the join key between the UI's droppable
/// identifier and this model; it must match the column's position in the
/// snapshot and be unique across it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnContent {
    pub index: usize,
    pub label: String,
    pub color: String,
    pub icon: Option<String>,
    /// Posts living directly in the column (not in any group).
    pub posts: Vec<Post>,
    pub groups: Vec<PostGroup>,
}

/// The full board state handed to the resolver, fresh on every gesture.
///
/// Invariant: every post id appears exactly once across all columns and
/// groups. Upholding it is the snapshot constructor's responsibility;
/// [`BoardSnapshot::validate`] checks it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub columns: Vec<ColumnContent>,
}

impl BoardSnapshot {
    pub fn new(columns: Vec<ColumnContent>) -> Self {
        Self { columns }
    }

    /// Checks the snapshot invariants: post-id uniqueness and stable
    /// column indices. A violation is a defect in the layer that built
    /// the snapshot, not a resolution miss.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for (position, column) in self.columns.iter().enumerate() {
            if column.index != position {
                return Err(DomainError::ColumnIndexMismatch {
                    expected: position,
                    found: column.index,
                });
            }
            let direct = column.posts.iter();
            let grouped = column.groups.iter().flat_map(|g| g.posts.iter());
            for post in direct.chain(grouped) {
                if !seen.insert(&post.id) {
                    return Err(DomainError::DuplicatePostId(post.id.clone()));
                }
            }
        }
        Ok(())
    }

    /// Total number of posts, counting group members.
    pub fn post_count(&self) -> usize {
        self.columns
            .iter()
            .map(|c| c.posts.len() + c.groups.iter().map(|g| g.posts.len()).sum::<usize>())
            .sum()
    }
}
