//! Normalized text input and render options.
//!
//! Raw ingestion (tab expansion, trailing-whitespace trimming, common-indent
//! stripping) happens outside this crate; the layout engine receives lines
//! that are already normalized, together with their display lengths. The
//! stripped common indent is carried along so the compositor can re-apply it
//! to every output row.

use serde::{Deserialize, Serialize};

/// One normalized input line with its display length in character cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    len: usize,
}

impl InputLine {
    fn new(text: String) -> Self {
        let len = text.chars().count();
        Self { text, len }
    }

    /// The line's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display length in character cells.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True iff the line is blank.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// The text block to be enclosed, immutable during layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedInput {
    lines: Vec<InputLine>,
    max_width: usize,
    indent: usize,
}

impl NormalizedInput {
    /// Build from already-normalized lines, computing per-line display
    /// lengths and the maximum line width.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<InputLine> = lines
            .into_iter()
            .map(|l| InputLine::new(l.into()))
            .collect();
        let max_width = lines.iter().map(InputLine::len).max().unwrap_or(0);
        Self {
            lines,
            max_width,
            indent: 0,
        }
    }

    /// Record the common indent the normalizer stripped; the compositor
    /// prepends it to every output row.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// All lines, in order.
    pub fn lines(&self) -> &[InputLine] {
        &self.lines
    }

    /// Line at `idx`, if present.
    pub fn line(&self, idx: usize) -> Option<&InputLine> {
        self.lines.get(idx)
    }

    /// Number of input lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Display length of the longest line.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Common indent stripped by the normalizer.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// True iff there are no input lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Horizontal placement of the text block inside the box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement of the text block inside the box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Per-render configuration passed alongside the design and input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Horizontal alignment of the whole text block.
    pub halign: HAlign,
    /// Vertical alignment of the whole text block.
    pub valign: VAlign,
    /// Requested minimum overall box width; raises the design's own minimum.
    pub min_width: Option<usize>,
    /// Requested minimum overall box height; raises the design's own minimum.
    pub min_height: Option<usize>,
}
