//! Shared board-building helpers for the integration tests.

use chrono::Utc;
use rf_core::models::{BoardSnapshot, ColumnContent, Participant, Post, PostGroup};
use uuid::Uuid;

pub fn participant(name: &str) -> Participant {
    Participant {
        id: format!("user-{name}"),
        name: name.to_string(),
    }
}

pub fn post(id: &str, content: &str) -> Post {
    Post {
        id: id.to_string(),
        content: content.to_string(),
        author: participant("alice"),
        likes: vec![],
        dislikes: vec![],
        created_at: Utc::now(),
    }
}

/// A post with a freshly minted unique id, for tests that only care about
/// board shape.
pub fn fresh_post(content: &str) -> Post {
    post(&Uuid::new_v4().to_string(), content)
}

pub fn empty_column(index: usize, label: &str) -> ColumnContent {
    ColumnContent {
        index,
        label: label.to_string(),
        color: "#eeeeee".to_string(),
        icon: None,
        posts: vec![],
        groups: vec![],
    }
}

/// The reference board used across the resolution tests:
///
/// - column 0: top-level post `p1`, group `g1` containing `p2`
/// - column 1: empty
pub fn two_column_board() -> BoardSnapshot {
    let mut well = empty_column(0, "What went well");
    well.posts.push(post("p1", "Standups stayed short"));
    well.groups.push(PostGroup {
        id: "g1".to_string(),
        label: "Process".to_string(),
        posts: vec![post("p2", "Review queue moved fast")],
    });
    BoardSnapshot::new(vec![well, empty_column(1, "To improve")])
}

/// A fuller three-column retro with posts and groups spread around, for
/// lookup and cross-column tests.
pub fn retro_board() -> BoardSnapshot {
    let mut well = empty_column(0, "What went well");
    well.icon = Some("satisfied".to_string());
    well.posts.push(post("p1", "Release went out on time"));
    well.posts.push(post("p2", "No pager noise this sprint"));
    well.groups.push(PostGroup {
        id: "g1".to_string(),
        label: "Tooling".to_string(),
        posts: vec![post("p3", "New CI cache"), post("p4", "Faster local builds")],
    });

    let mut improve = empty_column(1, "To improve");
    improve.posts.push(post("p5", "Too many meetings"));
    improve.groups.push(PostGroup {
        id: "g2".to_string(),
        label: "Planning".to_string(),
        posts: vec![post("p6", "Estimates drifted")],
    });

    let mut actions = empty_column(2, "Actions");
    actions.posts.push(post("p7", "Book a retro follow-up"));

    BoardSnapshot::new(vec![well, improve, actions])
}
