//! # Gesture Identifiers
//!
//! Opaque strings cross the UI boundary to name draggables and droppables.
//! The wire encoding is prefix-tagged: droppables are `column#<index>` or
//! `group#<id>`, draggables are a bare post id or `post#<id>`. Decoding is
//! centralized here so neither resolver entry point parses prefixes ad hoc.

use serde::{Deserialize, Serialize};

/// A decoded gesture identifier: which kind of entity the string names,
/// plus the embedded id or index. Borrows from the raw identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef<'a> {
    Post(&'a str),
    Column(usize),
    Group(&'a str),
}

impl<'a> EntityRef<'a> {
    /// Decodes a raw identifier. Unknown prefixes and unparseable column
    /// indices are `None` — an unrecognized encoding is a resolution miss,
    /// not a panic. A string without a `#` separator is a bare post id.
    pub fn decode(raw: &'a str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        match raw.split_once('#') {
            None => Some(EntityRef::Post(raw)),
            Some(("post", id)) => Some(EntityRef::Post(id)),
            Some(("group", id)) => Some(EntityRef::Group(id)),
            Some(("column", index)) => index.parse().ok().map(EntityRef::Column),
            Some(_) => None,
        }
    }

    /// The embedded post id, if this identifier names a post. Draggables
    /// must decode to posts; anything else is a miss for the resolver.
    pub fn as_post_id(&self) -> Option<&'a str> {
        match self {
            EntityRef::Post(id) => Some(id),
            _ => None,
        }
    }
}

/// The destination half of a drop gesture, as reported by the drag
/// interaction. `index` is the insertion position the UI computed, which
/// may be stale relative to the snapshot; the resolver clamps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropDestination {
    pub droppable_id: String,
    pub index: i64,
}

/// The combine half of a drag-end: the draggable the dragged post was
/// released on top of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombineTarget {
    pub draggable_id: String,
}

/// A completed drag interaction from the UI layer. At most one of
/// `destination` / `combine` is expected to be present; both absent means
/// the gesture was abandoned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragEndEvent {
    pub draggable_id: String,
    #[serde(default)]
    pub destination: Option<DropDestination>,
    #[serde(default)]
    pub combine: Option<CombineTarget>,
}
