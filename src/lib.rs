//! Box layout engine for drawing ASCII-art frames around text.
//!
//! A box style is a [`Design`]: sixteen rectangular glyphs arranged on a
//! compass rose, four corners plus three interior slots per side. Given a
//! design and a block of normalized text, [`render_box`] sizes the frame so
//! opposing sides meet, tiles the elastic glyphs to fill it, and composes
//! the text inside.
//!
//! ```
//! use boxgen::{Compass, Design, NormalizedInput, RenderOptions, Shape, render_box};
//!
//! let mut design = Design::new("rect");
//! let fixed = |g: &str| Shape::new([g], false).unwrap();
//! let elastic = |g: &str| Shape::new([g], true).unwrap();
//! design.shapes[Compass::Nw.index()] = fixed("+");
//! design.shapes[Compass::N.index()] = elastic("-");
//! design.shapes[Compass::Ne.index()] = fixed("+");
//! design.shapes[Compass::E.index()] = elastic("|");
//! design.shapes[Compass::Se.index()] = fixed("+");
//! design.shapes[Compass::S.index()] = elastic("-");
//! design.shapes[Compass::Sw.index()] = fixed("+");
//! design.shapes[Compass::W.index()] = elastic("|");
//!
//! let input = NormalizedInput::new(["hi"]);
//! let out = render_box(&design, &input, &RenderOptions::default()).unwrap();
//! assert_eq!(out, ["+--+", "|hi|", "+--+"]);
//! ```

pub mod assemble;
pub mod compass;
pub mod design;
pub mod error;
pub mod input;
pub mod render;
pub mod shape;
mod solver;

pub use assemble::{AssembledSide, FinalBox};
pub use compass::{Compass, Side, SideId, angular_distance, common_side, side_containing};
pub use design::{Catalog, DEFAULT_DESIGN, Design};
pub use error::BoxError;
pub use input::{HAlign, InputLine, NormalizedInput, RenderOptions, VAlign};
pub use render::{render_box, render_sample};
pub use shape::Shape;
