//! Flat-to-forest reconstruction.
//!
//! The API returns hierarchical collections as flat lists ordered by the
//! backend (`sort_order`, then creation time). The builder turns one of
//! those lists into a rooted forest without inventing any ordering of its
//! own: siblings keep the relative order of the input sequence.

use std::collections::HashMap;

use qcast_model::Hierarchical;

#[cfg(test)]
pub(crate) mod testing;

/// One item plus its nested children.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    pub item: T,
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn leaf(item: T) -> Self {
        Self {
            item,
            children: Vec::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}

/// Build a forest from a flat collection.
///
/// Two linear passes: index every id, then attach each item to its resolved
/// parent or to the root list. An item whose parent link is absent, refers
/// to itself, or points at an id not in `items` surfaces as a root rather
/// than being dropped. Input items are cloned into the nodes, never mutated.
pub fn build_forest<T>(items: &[T]) -> Vec<TreeNode<T>>
where
    T: Hierarchical + Clone,
{
    let mut position: HashMap<T::Id, usize> = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        position.entry(item.node_id()).or_insert(i);
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); items.len()];
    let mut roots: Vec<usize> = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let parent = item
            .parent()
            .filter(|p| *p != item.node_id())
            .and_then(|p| position.get(&p).copied());
        match parent {
            Some(p) => children[p].push(i),
            None => roots.push(i),
        }
    }

    roots
        .into_iter()
        .map(|i| assemble(i, items, &children))
        .collect()
}

// Depth here is the depth of the actual data: book/chapter hierarchies are
// human-authored and stay well within stack limits.
fn assemble<T: Clone>(i: usize, items: &[T], children: &[Vec<usize>]) -> TreeNode<T> {
    TreeNode {
        item: items[i].clone(),
        children: children[i]
            .iter()
            .map(|&c| assemble(c, items, children))
            .collect(),
    }
}

/// Preorder traversal. `visit` receives each node together with its depth
/// (roots are depth 0). Rendering, search, and the move picker all sit on
/// top of this.
pub fn walk<T>(forest: &[TreeNode<T>], visit: &mut impl FnMut(&TreeNode<T>, usize)) {
    fn inner<T>(
        nodes: &[TreeNode<T>],
        depth: usize,
        visit: &mut impl FnMut(&TreeNode<T>, usize),
    ) {
        for node in nodes {
            visit(node, depth);
            inner(&node.children, depth + 1, visit);
        }
    }
    inner(forest, 0, visit)
}

/// A candidate target for the "move to named parent" picker.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentOption<Id> {
    pub id: Id,
    pub title: String,
    /// Ancestor titles joined with `" / "`, this option's own title last.
    pub path: String,
}

/// Flatten the forest into move-picker entries, excluding the subtree rooted
/// at `moving`: an item can never become a descendant of itself.
pub fn parent_options<T: Hierarchical>(
    forest: &[TreeNode<T>],
    moving: T::Id,
) -> Vec<ParentOption<T::Id>> {
    fn collect<T: Hierarchical>(
        nodes: &[TreeNode<T>],
        moving: T::Id,
        prefix: &str,
        out: &mut Vec<ParentOption<T::Id>>,
    ) {
        for node in nodes {
            if node.item.node_id() == moving {
                continue;
            }
            let path = if prefix.is_empty() {
                node.item.label().to_string()
            } else {
                format!("{prefix} / {}", node.item.label())
            };
            out.push(ParentOption {
                id: node.item.node_id(),
                title: node.item.label().to_string(),
                path: path.clone(),
            });
            collect(&node.children, moving, &path, out);
        }
    }

    let mut options = Vec::new();
    collect(forest, moving, "", &mut options);
    options
}
