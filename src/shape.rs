//! The glyph model: small rectangular character tiles that box sides are
//! tiled from.
//!
//! A shape is either absent (zero width or height, never drawn) or a present
//! rectangle of `height` rows, each exactly `width` display cells wide.
//! Elastic shapes may be repeated to fill space; fixed shapes appear exactly
//! once per side.

use std::cmp::Ordering;

use crate::compass::Compass;
use crate::error::BoxError;

/// A rectangular glyph from a box design.
///
/// Widths are measured in fixed-width character cells (`char` count); this
/// crate is deliberately not Unicode-width-aware.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shape {
    rows: Vec<String>,
    width: usize,
    height: usize,
    elastic: bool,
}

impl Shape {
    /// Build a shape from its rows.
    ///
    /// All rows must have the display width of row 0; returns
    /// [`BoxError::RaggedShape`] otherwise. An empty row list (or an empty
    /// first row) produces the absent shape.
    pub fn new<I, S>(rows: I, elastic: bool) -> Result<Self, BoxError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<String> = rows.into_iter().map(Into::into).collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        for (i, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(BoxError::RaggedShape {
                    row: i,
                    expected: width,
                    actual,
                });
            }
        }
        let height = if width == 0 { 0 } else { rows.len() };
        Ok(Self {
            rows,
            width,
            height,
            elastic,
        })
    }

    /// The absent shape: no rows, zero size, never drawn.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True iff the shape has no visible cells.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Display width in character cells (0 for absent shapes).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows (0 for absent shapes).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether this shape may be repeated to absorb slack.
    pub fn elastic(&self) -> bool {
        self.elastic
    }

    /// Row `idx` of the glyph. Callers must keep `idx < height()`.
    pub fn row(&self, idx: usize) -> &str {
        &self.rows[idx]
    }

    /// Visual ordering between shapes.
    ///
    /// Absent shapes sort before present ones; among present shapes, smaller
    /// area sorts first; equal-area shapes compare row-by-row,
    /// case-sensitively.
    pub fn visual_cmp(&self, other: &Shape) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => (self.width * self.height)
                .cmp(&(other.width * other.height))
                .then_with(|| self.rows.cmp(&other.rows)),
        }
    }
}

/// Height of the tallest present shape among `set`, or 0 if all are absent.
pub fn tallest(shapes: &[Shape; Compass::COUNT], set: &[Compass]) -> usize {
    set.iter()
        .map(|&pos| &shapes[pos.index()])
        .filter(|s| !s.is_empty())
        .map(Shape::height)
        .max()
        .unwrap_or(0)
}

/// Width of the widest present shape among `set`, or 0 if all are absent.
pub fn widest(shapes: &[Shape; Compass::COUNT], set: &[Compass]) -> usize {
    set.iter()
        .map(|&pos| &shapes[pos.index()])
        .filter(|s| !s.is_empty())
        .map(Shape::width)
        .max()
        .unwrap_or(0)
}
