//! Ancestor path resolution for breadcrumbs and picker labels.

use std::collections::HashSet;

use qcast_model::Hierarchical;

use crate::lookup::ItemIndex;

/// Walk parent links upward from `target` and return the chain root-first.
///
/// Lenient by design: an unresolvable parent link ends the walk and the
/// partial path is returned, so breadcrumb rendering degrades instead of
/// erroring. A repeated id also ends the walk, which keeps accidentally
/// cyclic input from looping.
pub fn path_to_root<'a, T: Hierarchical>(items: &'a [T], target: T::Id) -> Vec<&'a T> {
    let index = ItemIndex::new(items);
    let mut path = Vec::new();
    let mut seen: HashSet<T::Id> = HashSet::new();
    let mut current = Some(target);

    while let Some(id) = current {
        if !seen.insert(id) {
            break;
        }
        let Some(item) = index.get(id) else { break };
        path.push(item);
        current = item.parent();
    }

    path.reverse();
    path
}

/// Resolve a backend-precomputed `path` string (slash-delimited ancestor
/// ids) into a human-readable label: the titles joined with `" > "`.
///
/// Segments that fail to parse or point at an unknown id are dropped from
/// the label rather than aborting the whole string.
pub fn display_path<T>(items: &[T], path: &str) -> String
where
    T: Hierarchical,
    T::Id: From<i32>,
{
    let index = ItemIndex::new(items);
    path.split('/')
        .filter_map(|segment| segment.trim().parse::<i32>().ok())
        .filter_map(|id| index.get(T::Id::from(id)))
        .map(Hierarchical::label)
        .collect::<Vec<_>>()
        .join(" > ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest::testing::{item, orphan, root};
    use qcast_model::ids::ChapterId;

    #[test]
    fn path_runs_root_first() {
        let items = vec![
            root(1, "Book"),
            item(2, Some(1), 0, "Part"),
            item(3, Some(2), 0, "Chapter"),
        ];

        let path = path_to_root(&items, ChapterId(3));
        let titles: Vec<&str> = path.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Book", "Part", "Chapter"]);
    }

    #[test]
    fn broken_link_yields_partial_path() {
        let items = vec![orphan(2, 99, "Part"), item(3, Some(2), 0, "Chapter")];

        let path = path_to_root(&items, ChapterId(3));
        let titles: Vec<&str> = path.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Part", "Chapter"]);
    }

    #[test]
    fn unknown_target_yields_empty_path() {
        let items = vec![root(1, "Book")];
        assert!(path_to_root(&items, ChapterId(42)).is_empty());
    }

    #[test]
    fn cyclic_links_terminate() {
        let items = vec![item(1, Some(2), 0, "a"), item(2, Some(1), 0, "b")];

        let path = path_to_root(&items, ChapterId(1));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn display_path_maps_ids_to_titles() {
        let items = vec![
            root(1, "Book"),
            item(2, Some(1), 0, "Part"),
            item(3, Some(2), 0, "Chapter"),
        ];

        assert_eq!(display_path(&items, "1/2/3"), "Book > Part > Chapter");
    }

    #[test]
    fn display_path_drops_unresolvable_segments() {
        let items = vec![root(1, "Book"), item(3, Some(1), 0, "Chapter")];

        assert_eq!(display_path(&items, "1/2/3"), "Book > Chapter");
        assert_eq!(display_path(&items, "x/7"), "");
    }
}
