//! End-to-end hierarchy behavior against the real chapter model.

use chrono::{TimeZone, Utc};
use qcast_core::{
    DropZone, ItemIndex, Mutation, build_forest, display_path, translate_drop,
};
use qcast_model::ids::{BookId, ChapterId};
use qcast_model::{Chapter, Hierarchical};

fn chapter(id: i32, parent_id: Option<i32>, sort_order: i32, title: &str) -> Chapter {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    Chapter {
        id: ChapterId(id),
        book_id: BookId(1),
        title: title.to_string(),
        description: None,
        parent_id,
        level: None,
        path: None,
        sort_order: Some(sort_order),
        media_count: 0,
        created_at: at,
        updated_at: at,
    }
}

#[test]
fn flat_fetch_builds_the_expected_forest() {
    let chapters = vec![
        chapter(1, None, 0, "Root"),
        chapter(2, Some(1), 0, "Child A"),
        chapter(3, Some(1), 1, "Child B"),
        chapter(4, Some(99), 0, "Orphan"),
    ];

    let forest = build_forest(&chapters);

    assert_eq!(forest.len(), 2);
    assert_eq!(forest[0].item.title, "Root");
    let child_titles: Vec<&str> = forest[0]
        .children
        .iter()
        .map(|n| n.item.title.as_str())
        .collect();
    assert_eq!(child_titles, vec!["Child A", "Child B"]);
    assert_eq!(forest[1].item.title, "Orphan");
    assert!(forest[1].children.is_empty());
}

#[test]
fn reordering_children_after_a_drop_uses_the_targets_position() {
    let chapters = vec![
        chapter(1, None, 0, "Root"),
        chapter(2, Some(1), 0, "Child A"),
        chapter(3, Some(1), 1, "Child B"),
    ];
    let index = ItemIndex::new(&chapters);

    assert_eq!(
        translate_drop(&index, ChapterId(2), ChapterId(3), DropZone::After),
        Some(Mutation::SetSortOrder {
            id: ChapterId(2),
            sort_order: 2
        })
    );
}

#[test]
fn dragging_into_another_subtree_reparents() {
    let chapters = vec![
        chapter(1, None, 0, "Root"),
        chapter(2, Some(1), 0, "Child A"),
        chapter(5, None, 1, "Other root"),
    ];
    let index = ItemIndex::new(&chapters);

    assert_eq!(
        translate_drop(&index, ChapterId(2), ChapterId(5), DropZone::Before),
        Some(Mutation::MoveToParent {
            id: ChapterId(2),
            new_parent_id: Some(ChapterId(5))
        })
    );
}

#[test]
fn wire_zero_parent_reads_as_root() {
    let c = chapter(2, Some(0), 0, "explicit root");
    assert_eq!(c.parent(), None);
}

#[test]
fn backend_path_strings_resolve_to_breadcrumbs() {
    let chapters = vec![
        chapter(1, None, 0, "Getting Started"),
        chapter(2, Some(1), 0, "Recording"),
        chapter(3, Some(2), 0, "Microphones"),
    ];

    assert_eq!(
        display_path(&chapters, "1/2/3"),
        "Getting Started > Recording > Microphones"
    );
}
