//! Diagram rendering.
//!
//! Each row's prefix is derived from the node's ancestor chain: an ancestor
//! that is the last child of its own parent contributes blank space, any
//! other ancestor contributes a vertical bar.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::{TreeArena, TreeNode};
use crate::domain::charset::{Charset, GlyphBundle};

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub charset: Charset,
    /// Append `/` to names that have children
    pub trailing_slash: bool,
    /// Prefix every name with its ancestors' names
    pub full_path: bool,
    /// Emit the synthetic root row and its connector column
    pub root_dot: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            charset: Charset::default(),
            trailing_slash: false,
            full_path: false,
            root_dot: true,
        }
    }
}

/// Render the whole tree, one row per visible node, without a trailing newline.
#[instrument(level = "debug", skip(tree))]
pub fn render_tree(tree: &TreeArena, config: &RenderConfig) -> String {
    let glyphs = config.charset.glyphs();

    tree.iter()
        .filter_map(|(idx, node)| render_row(tree, idx, node, config, glyphs))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_row(
    tree: &TreeArena,
    idx: Index,
    node: &TreeNode,
    config: &RenderConfig,
    glyphs: &GlyphBundle,
) -> Option<String> {
    if node.parent.is_none() {
        return config.root_dot.then(|| node.data.name.clone());
    }

    // Ancestors below the root, collected node-ward -> root-ward
    let mut segments: Vec<&str> = tree
        .ancestors(idx)
        .filter(|&a| tree.get_node(a).is_some_and(|n| n.parent.is_some()))
        .map(|a| {
            if tree.is_last_child(a) {
                glyphs.empty
            } else {
                glyphs.directory
            }
        })
        .collect();
    segments.reverse();
    segments.push(if tree.is_last_child(idx) {
        glyphs.last_child
    } else {
        glyphs.child
    });

    // Without the root row the top-level column disappears
    let skip = usize::from(!config.root_dot);
    let mut row: String = segments.into_iter().skip(skip).collect();
    row.push_str(&render_name(
        tree,
        idx,
        config.full_path,
        config.trailing_slash,
    ));
    Some(row)
}

/// Render a node's display name.
///
/// With `full_path`, ancestor names are prepended with the trailing slash
/// forced on, so the slash doubles as the path separator.
pub fn render_name(tree: &TreeArena, idx: Index, full_path: bool, trailing_slash: bool) -> String {
    let mut parts = Vec::new();
    let mut current = Some(idx);
    let mut slash = trailing_slash;

    while let Some(node) = current.and_then(|i| tree.get_node(i)) {
        parts.push(display_name(node, slash));
        if !full_path {
            break;
        }
        current = node.parent;
        slash = true;
    }

    parts.reverse();
    parts.concat()
}

fn display_name(node: &TreeNode, trailing_slash: bool) -> String {
    let name = &node.data.name;
    if trailing_slash && !node.children.is_empty() && !name.ends_with('/') {
        format!("{name}/")
    } else {
        name.clone()
    }
}
