//! Render indented outlines as directory-style tree diagrams.
//!
//! ```ignore
//! use treegen::domain::{parse_input, render_tree, RenderConfig};
//!
//! let tree = parse_input("src\n  main.rs\n  lib.rs");
//! println!("{}", render_tree(&tree, &RenderConfig::default()));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
