//! # Lookup Surface
//!
//! Read-only traversal over a [`BoardSnapshot`]. The resolver leans on
//! these so it never duplicates tree-walking logic. Lookups return borrows
//! paired with their path (column, optional group) instead of storing
//! parent pointers on the entities themselves.
//!
//! All lookups are O(posts + groups) per call. A gesture resolves at most
//! once per user action, so no incremental index is kept.

use crate::models::{BoardSnapshot, ColumnContent, Post, PostGroup};

/// Where a post currently lives: the post itself, its column, and the
/// containing group if it is a group member rather than a top-level post.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostLocation<'a> {
    pub post: &'a Post,
    pub column: &'a ColumnContent,
    pub group: Option<&'a PostGroup>,
}

/// A group together with its owning column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupLocation<'a> {
    pub group: &'a PostGroup,
    pub column: &'a ColumnContent,
}

impl BoardSnapshot {
    /// Locates a post anywhere in the snapshot: direct column posts first,
    /// then every group's posts. `None` for absent ids — a stale
    /// identifier is a normal occurrence (the post may have been deleted
    /// by another participant between render and drop).
    pub fn find_post(&self, post_id: &str) -> Option<PostLocation<'_>> {
        for column in &self.columns {
            if let Some(post) = column.posts.iter().find(|p| p.id == post_id) {
                return Some(PostLocation {
                    post,
                    column,
                    group: None,
                });
            }
            for group in &column.groups {
                if let Some(post) = group.posts.iter().find(|p| p.id == post_id) {
                    return Some(PostLocation {
                        post,
                        column,
                        group: Some(group),
                    });
                }
            }
        }
        None
    }

    /// Resolves a column by its stable index.
    pub fn column_by_index(&self, index: usize) -> Option<&ColumnContent> {
        self.columns.iter().find(|c| c.index == index)
    }

    /// Locates a group and its owning column by group id.
    pub fn find_group(&self, group_id: &str) -> Option<GroupLocation<'_>> {
        for column in &self.columns {
            if let Some(group) = column.groups.iter().find(|g| g.id == group_id) {
                return Some(GroupLocation { group, column });
            }
        }
        None
    }
}
