//! Domain layer: outline tree model, parsing and rendering
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod charset;
pub mod error;
pub mod parser;
pub mod render;

pub use arena::{NodeData, TreeArena, TreeNode};
pub use charset::{Charset, GlyphBundle};
pub use error::DomainError;
pub use parser::{build_tree, parse_input, split_input, ROOT_DEPTH, ROOT_NAME};
pub use render::{render_name, render_tree, RenderConfig};
