//! Side assembly: turning fill quotas into the four edge rectangles.
//!
//! The top and bottom strips span the full box width with the corner glyphs
//! baked into their ends; the left and right strips cover only the interior
//! band between them. Interior glyphs are emitted in screen order (left to
//! right, top to bottom), which for the bottom and left sides means walking
//! their clockwise slot lists in reverse.

use log::debug;

use crate::compass::{self, Compass, SideId};
use crate::design::Design;
use crate::error::BoxError;
use crate::input::{NormalizedInput, RenderOptions};
use crate::shape::{self, Shape};
use crate::solver::{Extent, Quotas, balance_pair, horizontal_target, vertical_target};

/// One completed box edge: a `width x height` rectangle of rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembledSide {
    rows: Vec<String>,
    width: usize,
    height: usize,
}

impl AssembledSide {
    /// All rows, top to bottom, each `width` cells long (modulo the design's
    /// own column-width contract).
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Row at `idx`. Callers must keep `idx < height()`.
    pub fn row(&self, idx: usize) -> &str {
        &self.rows[idx]
    }

    /// Width in character cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows.
    pub fn height(&self) -> usize {
        self.height
    }
}

/// The four assembled edges plus the interior spans they enclose.
#[derive(Clone, Debug)]
pub struct FinalBox {
    pub top: AssembledSide,
    pub bottom: AssembledSide,
    pub left: AssembledSide,
    pub right: AssembledSide,
    /// Interior width in columns, corners excluded.
    pub hspace: usize,
    /// Interior height in rows, top/bottom strips excluded.
    pub vspace: usize,
}

impl FinalBox {
    /// Solve both side pairs and assemble all four edges.
    pub fn build(
        design: &Design,
        input: &NormalizedInput,
        opts: &RenderOptions,
    ) -> Result<Self, BoxError> {
        let hplan = balance_pair(
            design,
            compass::side(SideId::Top),
            compass::side(SideId::Bottom),
            Extent::Columns,
            horizontal_target(design, input, opts),
        )?;
        let vplan = balance_pair(
            design,
            compass::side(SideId::Left),
            compass::side(SideId::Right),
            Extent::Rows,
            vertical_target(design, input, opts),
        )?;

        let top = assemble_top(design, &hplan.first, hplan.span);
        let bottom = assemble_bottom(design, &hplan.second, hplan.span);
        let left = assemble_vertical(design, SideId::Left, &vplan.first, vplan.span);
        let right = assemble_vertical(design, SideId::Right, &vplan.second, vplan.span);

        debug!(
            "assembled box '{}': {}x{} ({} interior columns, {} interior rows)",
            design.name,
            top.width,
            top.height + vplan.span + bottom.height,
            hplan.span,
            vplan.span
        );

        Ok(Self {
            top,
            bottom,
            left,
            right,
            hspace: hplan.span,
            vspace: vplan.span,
        })
    }

    /// Overall box width (equals both horizontal strips).
    pub fn width(&self) -> usize {
        self.top.width
    }

    /// Overall box height: both horizontal strips plus the interior band.
    pub fn height(&self) -> usize {
        self.top.height + self.vspace + self.bottom.height
    }
}

fn assemble_top(design: &Design, quotas: &Quotas, span: usize) -> AssembledSide {
    let p = compass::side(SideId::Top).positions();
    let height = shape::tallest(&design.shapes, p);
    horizontal_strip(
        design,
        p[0],
        p[4],
        [(p[1], quotas[0]), (p[2], quotas[1]), (p[3], quotas[2])],
        height,
        span,
    )
}

fn assemble_bottom(design: &Design, quotas: &Quotas, span: usize) -> AssembledSide {
    // The bottom side's clockwise list runs right-to-left on screen, so the
    // strip is emitted in reverse slot order.
    let p = compass::side(SideId::Bottom).positions();
    let height = shape::tallest(&design.shapes, p);
    horizontal_strip(
        design,
        p[4],
        p[0],
        [(p[3], quotas[2]), (p[2], quotas[1]), (p[1], quotas[0])],
        height,
        span,
    )
}

/// Build one full-width horizontal strip: leading corner, interior slots in
/// screen order, trailing corner.
fn horizontal_strip(
    design: &Design,
    lead: Compass,
    trail: Compass,
    slots: [(Compass, usize); 3],
    height: usize,
    span: usize,
) -> AssembledSide {
    let lead_shape = design.shape(lead);
    let trail_shape = design.shape(trail);
    let width = lead_shape.width() + span + trail_shape.width();

    let mut rows = vec![String::with_capacity(width); height];
    emit_columns(&mut rows, lead_shape, lead_shape.width());
    for (pos, quota) in slots {
        emit_columns(&mut rows, design.shape(pos), quota);
    }
    emit_columns(&mut rows, trail_shape, trail_shape.width());

    AssembledSide {
        rows,
        width,
        height,
    }
}

/// Append `quota` columns of `glyph` to every strip row; glyph rows cycle
/// when the glyph is shorter than the strip.
fn emit_columns(rows: &mut [String], glyph: &Shape, quota: usize) {
    if glyph.is_empty() || quota == 0 {
        return;
    }
    let mut remaining = quota;
    while remaining > 0 {
        for (r, row) in rows.iter_mut().enumerate() {
            row.push_str(glyph.row(r % glyph.height()));
        }
        remaining = remaining.saturating_sub(glyph.width());
    }
}

/// Build one vertical strip covering the interior band: slots walked top to
/// bottom, each slot's glyph rows cycling from row 0 until its row quota is
/// spent. Rows are padded to the side's column width.
fn assemble_vertical(
    design: &Design,
    id: SideId,
    quotas: &Quotas,
    vspace: usize,
) -> AssembledSide {
    let side = compass::side(id);
    let width = shape::widest(&design.shapes, side.positions());
    let interior = side.interior();
    // The right side's clockwise list already runs top-to-bottom; the left
    // side's runs bottom-to-top and is walked in reverse.
    let order: [usize; 3] = if id == SideId::Right { [0, 1, 2] } else { [2, 1, 0] };

    let mut rows = Vec::with_capacity(vspace);
    for slot in order {
        let glyph = design.shape(interior[slot]);
        if glyph.is_empty() || quotas[slot] == 0 {
            continue;
        }
        let pad = " ".repeat(width - glyph.width());
        let mut cycle = 0;
        for _ in 0..quotas[slot] {
            let mut row = String::with_capacity(width);
            row.push_str(glyph.row(cycle));
            row.push_str(&pad);
            rows.push(row);
            cycle = (cycle + 1) % glyph.height();
        }
    }
    debug_assert_eq!(rows.len(), vspace);

    AssembledSide {
        rows,
        width,
        height: vspace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(rows: &[&str], elastic: bool) -> Shape {
        Shape::new(rows.iter().copied(), elastic).unwrap()
    }

    fn set(design: &mut Design, pos: Compass, rows: &[&str], elastic: bool) {
        design.shapes[pos.index()] = shape(rows, elastic);
    }

    fn rectangle() -> Design {
        let mut d = Design::new("rect");
        set(&mut d, Compass::Nw, &["+"], false);
        set(&mut d, Compass::N, &["-"], true);
        set(&mut d, Compass::Ne, &["+"], false);
        set(&mut d, Compass::E, &["|"], true);
        set(&mut d, Compass::Se, &["+"], false);
        set(&mut d, Compass::S, &["-"], true);
        set(&mut d, Compass::Sw, &["+"], false);
        set(&mut d, Compass::W, &["|"], true);
        d
    }

    fn build(design: &Design, lines: &[&str]) -> FinalBox {
        let input = NormalizedInput::new(lines.iter().copied());
        FinalBox::build(design, &input, &RenderOptions::default()).unwrap()
    }

    #[test]
    fn test_rectangle_sides() {
        let fb = build(&rectangle(), &["hi"]);
        assert_eq!(fb.top.rows(), ["+--+"]);
        assert_eq!(fb.bottom.rows(), ["+--+"]);
        assert_eq!(fb.left.rows(), ["|"]);
        assert_eq!(fb.right.rows(), ["|"]);
        assert_eq!(fb.hspace, 2);
        assert_eq!(fb.vspace, 1);
        assert_eq!(fb.width(), 4);
        assert_eq!(fb.height(), 3);
    }

    #[test]
    fn test_corner_continuity() {
        let mut d = rectangle();
        set(&mut d, Compass::Nw, &["/*"], false);
        set(&mut d, Compass::Ne, &["*/"], false);
        set(&mut d, Compass::Sw, &["\\*"], false);
        set(&mut d, Compass::Se, &["*/"], false);
        let fb = build(&d, &["hey"]);

        // Each horizontal strip starts and ends with exactly its corner glyph.
        assert!(fb.top.row(0).starts_with("/*"));
        assert!(fb.top.row(0).ends_with("*/"));
        assert!(fb.bottom.row(0).starts_with("\\*"));
        assert!(fb.bottom.row(0).ends_with("*/"));
        assert_eq!(fb.top.width(), fb.hspace + 4);
        assert_eq!(fb.top.width(), fb.bottom.width());
    }

    #[test]
    fn test_bottom_strip_reads_left_to_right() {
        let mut d = rectangle();
        set(&mut d, Compass::Ssw, &["<"], false);
        let fb = build(&d, &["hi"]);
        // SSW sits next to the SW corner, so its glyph lands leftmost.
        assert_eq!(fb.bottom.rows(), ["+<-+"]);
    }

    #[test]
    fn test_multirow_glyph_cycles_down_vertical_strip() {
        let mut d = rectangle();
        set(&mut d, Compass::W, &["|", "!"], true);
        let fb = build(&d, &["a", "b", "c"]);
        // West grows in 2-row steps, east in 1-row steps; both settle on 4.
        assert_eq!(fb.vspace, 4);
        assert_eq!(fb.left.rows(), ["|", "!", "|", "!"]);
        assert_eq!(fb.right.rows(), ["|", "|", "|", "|"]);
    }

    #[test]
    fn test_left_strip_walks_slots_top_down() {
        let mut d = rectangle();
        set(&mut d, Compass::Wnw, &["^"], false);
        let fb = build(&d, &["a", "b"]);
        // WNW sits next to the NW corner, so its glyph lands topmost.
        assert_eq!(fb.left.rows(), ["^", "|"]);
    }

    #[test]
    fn test_narrow_vertical_glyphs_are_padded_to_side_width() {
        let mut d = rectangle();
        set(&mut d, Compass::Nw, &["##"], false);
        set(&mut d, Compass::Sw, &["##"], false);
        let fb = build(&d, &["x"]);
        // The 1-wide west glyph pads out to the 2-wide corner column.
        assert_eq!(fb.left.rows(), ["| "]);
        assert_eq!(fb.left.width(), 2);
    }

    #[test]
    fn test_multirow_corner_repeats_across_strip_rows() {
        let mut d = rectangle();
        set(&mut d, Compass::Nw, &["+", "+"], false);
        set(&mut d, Compass::N, &["=", "-"], true);
        set(&mut d, Compass::Ne, &["+", "+"], false);
        let fb = build(&d, &["hi"]);
        assert_eq!(fb.top.rows(), ["+==+", "+--+"]);
    }
}
