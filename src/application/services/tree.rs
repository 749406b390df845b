//! Outline tree service
//!
//! Turns outline text into a rendered diagram or a flat listing.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{parse_input, render_tree, split_input, RenderConfig, TreeArena};
use crate::infrastructure::traits::FileSystem;

/// Parsed tree together with its rendered diagram.
#[derive(Debug)]
pub struct TreeOutput {
    pub tree: TreeArena,
    pub diagram: String,
}

/// Service for rendering outlines.
pub struct TreeService {
    fs: Arc<dyn FileSystem>,
}

impl TreeService {
    /// Create a new tree service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Parse outline text and render it.
    #[instrument(level = "debug", skip(self, input))]
    pub fn render(&self, input: &str, config: &RenderConfig) -> TreeOutput {
        let tree = parse_input(input);
        debug!(
            "render: {} nodes, depth {}, {} leaves",
            tree.len(),
            tree.depth(),
            tree.leaf_nodes().len()
        );
        let diagram = render_tree(&tree, config);
        TreeOutput { tree, diagram }
    }

    /// Flat listing, one `<depth>\t<name>` row per non-blank line.
    pub fn flat_listing(&self, input: &str) -> String {
        split_input(input)
            .iter()
            .map(|entry| format!("{}\t{}", entry.indent_depth, entry.name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Read outline text from a file.
    pub fn read_input(&self, path: &Path) -> ApplicationResult<String> {
        debug!("read_input: {}", path.display());
        if !self.fs.exists(path) {
            return Err(ApplicationError::InputNotFound(path.to_path_buf()));
        }
        self.fs
            .read_to_string(path)
            .with_path_context("read outline", path)
    }

    /// Read a file and render its outline.
    pub fn render_file(&self, path: &Path, config: &RenderConfig) -> ApplicationResult<String> {
        let input = self.read_input(path)?;
        Ok(self.render(&input, config).diagram)
    }
}
