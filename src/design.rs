//! Box designs and the design catalog.
//!
//! A design is one complete box style: 16 shapes indexed by compass
//! position plus metadata. Designs are built once by an external catalog
//! loader and stay immutable; this module only stores and selects them.

use log::debug;

use crate::compass::Compass;
use crate::error::BoxError;
use crate::shape::Shape;

/// Name of the design used when the caller requests none.
pub const DEFAULT_DESIGN: &str = "C";

/// One complete box style.
#[derive(Clone, Debug)]
pub struct Design {
    /// Unique style name; compared case-insensitively.
    pub name: String,
    /// Credited author, if known.
    pub author: Option<String>,
    /// Rendered example text shown by design listings.
    pub sample: String,
    /// Minimum overall box width this design guarantees.
    pub minwidth: usize,
    /// Minimum overall box height this design guarantees.
    pub minheight: usize,
    /// The 16 glyphs, indexed by [`Compass`].
    pub shapes: [Shape; Compass::COUNT],
}

impl Design {
    /// Create a design with the given name and no shapes set.
    ///
    /// Intended for catalog loaders, which fill in the public fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: None,
            sample: String::new(),
            minwidth: 0,
            minheight: 0,
            shapes: std::array::from_fn(|_| Shape::empty()),
        }
    }

    /// The glyph at a compass position.
    pub fn shape(&self, pos: Compass) -> &Shape {
        &self.shapes[pos.index()]
    }
}

/// An immutable collection of designs, selectable by name.
#[derive(Clone, Debug)]
pub struct Catalog {
    designs: Vec<Design>,
}

impl Catalog {
    /// Wrap a loaded design list. An empty list is a fatal configuration
    /// error ([`BoxError::EmptyCatalog`]).
    pub fn new(designs: Vec<Design>) -> Result<Self, BoxError> {
        if designs.is_empty() {
            return Err(BoxError::EmptyCatalog);
        }
        Ok(Self { designs })
    }

    /// Select a design by name (case-insensitive).
    ///
    /// With `None`, falls back to the design named `"C"`, or failing that
    /// the first design in the catalog. A name that matches nothing is
    /// [`BoxError::UnknownDesign`].
    pub fn select(&self, name: Option<&str>) -> Result<&Design, BoxError> {
        if let Some(sel) = name {
            return self
                .designs
                .iter()
                .find(|d| d.name.eq_ignore_ascii_case(sel))
                .ok_or_else(|| BoxError::UnknownDesign(sel.to_string()));
        }

        let chosen = self
            .designs
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(DEFAULT_DESIGN))
            .unwrap_or(&self.designs[0]);
        debug!("no design requested, selected '{}'", chosen.name);
        Ok(chosen)
    }

    /// All designs, in load order.
    pub fn designs(&self) -> &[Design] {
        &self.designs
    }
}
