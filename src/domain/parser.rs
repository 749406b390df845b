//! Indented outline parsing.
//!
//! Nesting is recovered purely from relative indentation: a line opens a
//! subtree under the nearest preceding line that is indented strictly less.

use generational_arena::Index;
use tracing::{instrument, trace};

use crate::domain::arena::{NodeData, TreeArena};

/// Name of the synthetic root.
pub const ROOT_NAME: &str = ".";

/// Indent depth of the synthetic root, lower than any real line.
pub const ROOT_DEPTH: isize = -1;

/// Split raw text into a flat, ordered listing of outline entries.
///
/// Blank lines are dropped entirely. Each remaining line yields its leading
/// whitespace count (any whitespace char counts as one) and its trimmed text.
pub fn split_input(input: &str) -> Vec<NodeData> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let leading = line.chars().take_while(|c| c.is_whitespace()).count();
            NodeData {
                name: line.trim().to_string(),
                indent_depth: isize::try_from(leading).unwrap_or(isize::MAX),
            }
        })
        .collect()
}

/// Parse raw text into a tree anchored at a synthetic `.` root.
///
/// Empty or blank-only input yields a root without children.
#[instrument(level = "debug", skip(input), fields(bytes = input.len()))]
pub fn parse_input(input: &str) -> TreeArena {
    build_tree(split_input(input))
}

/// Assemble flat entries into a tree using a stack of open ancestors.
pub fn build_tree(entries: impl IntoIterator<Item = NodeData>) -> TreeArena {
    let mut tree = TreeArena::new();
    let root = tree.insert_node(
        NodeData {
            name: ROOT_NAME.to_string(),
            indent_depth: ROOT_DEPTH,
        },
        None,
    );

    let mut open: Vec<(Index, isize)> = vec![(root, ROOT_DEPTH)];

    for entry in entries {
        // Close every open subtree at the same or deeper indentation; the root stays
        while open.len() > 1 && open.last().is_some_and(|&(_, d)| d >= entry.indent_depth) {
            open.pop();
        }
        let parent = open.last().map_or(root, |&(idx, _)| idx);
        let depth = entry.indent_depth;
        trace!(name = %entry.name, depth, "attach");
        let idx = tree.insert_node(entry, Some(parent));
        open.push((idx, depth));
    }

    tree
}
