//! Arena-backed outline tree.

use generational_arena::{Arena, Index};
use tracing::instrument;

/// Data payload for tree nodes: one outline line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Line text with surrounding whitespace stripped
    pub name: String,
    /// Count of leading whitespace chars; the synthetic root uses `ROOT_DEPTH`
    pub indent_depth: isize,
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode {
    /// Outline line for this node
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in input order
    pub children: Vec<Index>,
}

/// Arena-based tree structure.
///
/// Nodes own their children through the arena; the `parent` back-reference
/// is a plain index, so upward walks never touch ownership.
#[derive(Debug)]
pub struct TreeArena {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert a node and append it to its parent's children.
    ///
    /// A node inserted without a parent becomes the root.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order, left-to-right traversal starting at the root.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Indices from the node's parent up to and including the root.
    pub fn ancestors(&self, idx: Index) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: self.get_node(idx).and_then(|n| n.parent),
        }
    }

    /// True only if the node has a parent whose final child is this node.
    ///
    /// Compares arena indices, so siblings sharing a name are told apart.
    pub fn is_last_child(&self, idx: Index) -> bool {
        self.get_node(idx)
            .and_then(|node| node.parent)
            .and_then(|parent| self.get_node(parent))
            .and_then(|parent| parent.children.last())
            .is_some_and(|&last| last == idx)
    }

    /// Number of levels, counting the root as one. Empty arenas have depth 0.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }

        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.get_node(idx) {
                for &child in &node.children {
                    stack.push((child, depth + 1));
                }
            }
        }

        max_depth
    }

    /// Collects the names of all leaf nodes (nodes with no children) in pre-order.
    ///
    /// A root without children counts as a leaf.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(_, node)| node.data.name.clone())
            .collect()
    }
}

pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.stack.pop()?;
        let node = self.arena.get_node(current_idx)?;
        // Push children in reverse order for left-to-right traversal
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some((current_idx, node))
    }
}

pub struct Ancestors<'a> {
    arena: &'a TreeArena,
    next: Option<Index>,
}

impl Iterator for Ancestors<'_> {
    type Item = Index;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.arena.get_node(current).and_then(|n| n.parent);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(name: &str, indent_depth: isize) -> NodeData {
        NodeData {
            name: name.to_string(),
            indent_depth,
        }
    }

    //  .
    //  ├── a
    //  │   └── c
    //  └── b
    fn sample() -> (TreeArena, [Index; 4]) {
        let mut tree = TreeArena::new();
        let root = tree.insert_node(data(".", -1), None);
        let a = tree.insert_node(data("a", 0), Some(root));
        let c = tree.insert_node(data("c", 2), Some(a));
        let b = tree.insert_node(data("b", 0), Some(root));
        (tree, [root, a, b, c])
    }

    #[test]
    fn given_nodes_when_inserting_then_links_parent_and_children() {
        let (tree, [root, a, b, c]) = sample();

        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.get_node(root).unwrap().children, vec![a, b]);
        assert_eq!(tree.get_node(a).unwrap().children, vec![c]);
        assert_eq!(tree.get_node(c).unwrap().parent, Some(a));
        assert!(tree.get_node(root).unwrap().parent.is_none());
    }

    #[test]
    fn given_tree_when_iterating_then_yields_pre_order() {
        let (tree, _) = sample();

        let names: Vec<_> = tree.iter().map(|(_, n)| n.data.name.as_str()).collect();

        assert_eq!(names, vec![".", "a", "c", "b"]);
    }

    #[test]
    fn given_tree_when_checking_last_child_then_uses_identity() {
        let (tree, [root, a, b, c]) = sample();

        assert!(!tree.is_last_child(root));
        assert!(!tree.is_last_child(a));
        assert!(tree.is_last_child(b));
        assert!(tree.is_last_child(c));
    }

    #[test]
    fn given_same_named_siblings_when_checking_last_child_then_only_final_one_is_last() {
        let mut tree = TreeArena::new();
        let root = tree.insert_node(data(".", -1), None);
        let first = tree.insert_node(data("twin", 0), Some(root));
        let second = tree.insert_node(data("twin", 0), Some(root));

        assert!(!tree.is_last_child(first));
        assert!(tree.is_last_child(second));
    }

    #[test]
    fn given_deep_node_when_walking_ancestors_then_ends_at_root() {
        let (tree, [root, a, _, c]) = sample();

        assert_eq!(tree.ancestors(c).collect::<Vec<_>>(), vec![a, root]);
        assert_eq!(tree.ancestors(root).count(), 0);
    }

    #[test]
    fn given_tree_when_measuring_then_reports_depth_and_leaves() {
        let (tree, _) = sample();

        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.leaf_nodes(), vec!["c", "b"]);
        assert_eq!(TreeArena::new().depth(), 0);
    }
}
