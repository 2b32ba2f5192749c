//! # Gesture Resolver
//!
//! Translates a completed drag gesture — opaque identifiers plus the
//! current board snapshot — into a fully resolved domain operation, or
//! `None` when the gesture cannot be mapped (a *resolution miss*).
//!
//! The resolver is a pure function of its arguments: it never mutates the
//! snapshot, performs no I/O, and holds no state between calls. Applying
//! a result (splicing posts, renumbering) belongs to the command layer
//! downstream. Misses are routine in a multi-user session — gestures race
//! against concurrent edits — so they are results, not errors.

use tracing::debug;

use crate::gesture::{DragEndEvent, EntityRef};
use crate::models::{BoardSnapshot, Post, PostGroup};

/// A resolved move: which post goes where. A description of intent only;
/// the resolver does not apply it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult<'a> {
    pub post: &'a Post,
    /// `None` when the destination is a column's top-level sequence (the
    /// post leaves any group it was in).
    pub target_group: Option<&'a PostGroup>,
    pub target_column: usize,
    /// Insertion position, already clamped to the target sequence.
    pub target_index: usize,
}

/// The two participants of a combine gesture, in (dragged, target) order.
/// What combining *means* — new group, merge into an existing one — is
/// policy for the consumer, as is whether cross-column or same-group
/// combines are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombineResult<'a> {
    pub post1: &'a Post,
    pub post2: &'a Post,
}

/// The outcome of dispatching a full drag-end event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureResolution<'a> {
    Move(MoveResult<'a>),
    Combine(CombineResult<'a>),
}

/// Clamps a UI-reported insertion index to `[0, len]`. Out-of-range
/// indices are expected (the UI may have computed the index before a
/// concurrent deletion shrank the list) and mean "nearest valid end".
fn clamp_index(requested: i64, len: usize) -> usize {
    requested.clamp(0, len as i64) as usize
}

/// Resolves a move gesture: dragged post → destination container + index.
///
/// Identity moves (same container, same index) are not suppressed;
/// filtering no-ops is caller policy.
pub fn resolve_move<'a>(
    dragged_id: &str,
    destination_id: &str,
    destination_index: i64,
    board: &'a BoardSnapshot,
) -> Option<MoveResult<'a>> {
    // 1. Decode the dragged identifier; only posts are draggable here.
    let post_id = EntityRef::decode(dragged_id)?.as_post_id()?;

    // 2. Locate the post. Absence means it vanished under the drag.
    let Some(origin) = board.find_post(post_id) else {
        debug!(post_id, "move gesture on a post no longer in the snapshot");
        return None;
    };

    // 3. Decode the destination and resolve its container. A group
    //    destination adopts the group's owning column, even when the post
    //    started in a different column. A group that is both source and
    //    destination is fine: the group's own sequence is the context.
    let resolved = match EntityRef::decode(destination_id)? {
        EntityRef::Column(index) => {
            let column = board.column_by_index(index)?;
            MoveResult {
                post: origin.post,
                target_group: None,
                target_column: column.index,
                target_index: clamp_index(destination_index, column.posts.len()),
            }
        }
        EntityRef::Group(group_id) => {
            let target = board.find_group(group_id)?;
            MoveResult {
                post: origin.post,
                target_group: Some(target.group),
                target_column: target.column.index,
                target_index: clamp_index(destination_index, target.group.posts.len()),
            }
        }
        // A post is not a droppable container.
        EntityRef::Post(_) => return None,
    };

    debug!(
        post_id,
        target_column = resolved.target_column,
        target_group = resolved.target_group.map(|g| g.id.as_str()),
        target_index = resolved.target_index,
        "resolved move gesture"
    );
    Some(resolved)
}

/// Resolves a combine gesture: dragged post released on top of another.
///
/// Irreflexive: a post cannot combine with itself. Both posts are
/// identified but no policy is applied — cross-column and same-group
/// combines resolve normally.
pub fn resolve_combine<'a>(
    dragged_id: &str,
    target_dragged_id: &str,
    board: &'a BoardSnapshot,
) -> Option<CombineResult<'a>> {
    // 1. Decode both identifiers.
    let dragged = EntityRef::decode(dragged_id)?.as_post_id()?;
    let target = EntityRef::decode(target_dragged_id)?.as_post_id()?;

    // 2. Self-combine is meaningless.
    if dragged == target {
        return None;
    }

    // 3. Locate both participants.
    let post1 = board.find_post(dragged)?.post;
    let post2 = board.find_post(target)?.post;

    debug!(post1 = %post1.id, post2 = %post2.id, "resolved combine gesture");
    Some(CombineResult { post1, post2 })
}

/// Dispatches a full drag-end event to the right resolver. A destination
/// takes the move path, a combine target the combine path; an abandoned
/// gesture (neither present) resolves to `None`.
pub fn resolve_drag_end<'a>(
    event: &DragEndEvent,
    board: &'a BoardSnapshot,
) -> Option<GestureResolution<'a>> {
    if let Some(destination) = &event.destination {
        return resolve_move(
            &event.draggable_id,
            &destination.droppable_id,
            destination.index,
            board,
        )
        .map(GestureResolution::Move);
    }
    if let Some(combine) = &event.combine {
        return resolve_combine(&event.draggable_id, &combine.draggable_id, board)
            .map(GestureResolution::Combine);
    }
    debug!(draggable_id = %event.draggable_id, "abandoned drag gesture");
    None
}
