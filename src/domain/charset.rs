//! Connector glyph tables for the supported character sets.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// The four connector strings used to draw one row of the diagram.
///
/// All four share the same column width so rows stay aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBundle {
    /// Connector for a child that has later siblings
    pub child: &'static str,
    /// Connector for the last child of its parent
    pub last_child: &'static str,
    /// Continuation under an ancestor that still has siblings to print
    pub directory: &'static str,
    /// Continuation under an ancestor whose subtree is finished
    pub empty: &'static str,
}

impl GlyphBundle {
    /// Column width of one segment, in chars.
    pub fn width(&self) -> usize {
        self.child.chars().count()
    }
}

const ASCII: GlyphBundle = GlyphBundle {
    child: "|-- ",
    last_child: "`-- ",
    directory: "|   ",
    empty: "    ",
};

const UTF8: GlyphBundle = GlyphBundle {
    child: "├── ",
    last_child: "└── ",
    directory: "│   ",
    empty: "    ",
};

/// Named glyph bundle selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// 7-bit safe: pipes, backticks and hyphens
    Ascii,
    /// Unicode box drawing
    #[default]
    Utf8,
}

impl Charset {
    pub fn glyphs(&self) -> &'static GlyphBundle {
        match self {
            Charset::Ascii => &ASCII,
            Charset::Utf8 => &UTF8,
        }
    }
}

impl FromStr for Charset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" => Ok(Charset::Ascii),
            "utf-8" | "utf8" | "unicode" => Ok(Charset::Utf8),
            _ => Err(DomainError::UnknownCharset(s.to_string())),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Charset::Ascii => write!(f, "ascii"),
            Charset::Utf8 => write!(f, "utf-8"),
        }
    }
}
