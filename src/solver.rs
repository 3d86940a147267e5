//! The space-allocation solver.
//!
//! Computes per-shape fill quotas for a pair of opposing sides so that both
//! sides converge to the same total length, at least as long as the target.
//! This is a discrete water-filling process: whichever side is currently
//! behind receives the next increment, so opposing sides finish equal.
//!
//! The horizontal instance (top/bottom) allocates columns; the vertical
//! instance (left/right) is its exact mirror and allocates rows. Both run
//! through [`balance_pair`].

use log::{debug, trace};

use crate::compass::{Compass, Side};
use crate::design::Design;
use crate::error::BoxError;
use crate::input::{NormalizedInput, RenderOptions};
use crate::shape::Shape;

/// Which glyph extent a solver instance allocates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Extent {
    Columns,
    Rows,
}

impl Extent {
    fn of(self, shape: &Shape) -> usize {
        match self {
            Extent::Columns => shape.width(),
            Extent::Rows => shape.height(),
        }
    }
}

/// Fill quotas for the three interior slots of one side, in clockwise order.
pub(crate) type Quotas = [usize; 3];

/// Converged allocation for one pair of opposing sides.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PairPlan {
    /// Quotas for the top (or left) side.
    pub first: Quotas,
    /// Quotas for the bottom (or right) side.
    pub second: Quotas,
    /// The shared interior span both sides converged to, corners excluded.
    pub span: usize,
}

/// Interior width the top/bottom pair must reach, corners excluded.
pub(crate) fn horizontal_target(
    design: &Design,
    input: &NormalizedInput,
    opts: &RenderOptions,
) -> usize {
    let minwidth = opts.min_width.map_or(design.minwidth, |w| w.max(design.minwidth));
    let corners = design.shape(Compass::Nw).width() + design.shape(Compass::Ne).width();
    input.max_width().max(minwidth.saturating_sub(corners))
}

/// Interior height the left/right pair must reach, corner rows excluded.
pub(crate) fn vertical_target(
    design: &Design,
    input: &NormalizedInput,
    opts: &RenderOptions,
) -> usize {
    let minheight = opts.min_height.map_or(design.minheight, |h| h.max(design.minheight));
    let corners = design.shape(Compass::Nw).height() + design.shape(Compass::Sw).height();
    input.line_count().max(minheight.saturating_sub(corners))
}

/// Check the layout contract for one side: 1 to 3 present interior shapes,
/// at least one of them elastic. Returns the present-shape count.
///
/// Validating up front (instead of bailing mid-loop) also makes the
/// balancing loop's termination provable: the selected side always has an
/// elastic increment available while it is behind or below target.
fn validate_side(design: &Design, side: &'static Side) -> Result<usize, BoxError> {
    let mut present = 0;
    let mut elastic = 0;
    for pos in side.interior() {
        let s = design.shape(pos);
        if !s.is_empty() {
            present += 1;
            if s.elastic() {
                elastic += 1;
            }
        }
    }
    if present == 0 {
        return Err(BoxError::InvariantViolation {
            design: design.name.clone(),
            side: side.id(),
            details: "no interior shapes present".to_string(),
        });
    }
    if elastic == 0 {
        return Err(BoxError::InvariantViolation {
            design: design.name.clone(),
            side: side.id(),
            details: "no elastic interior shape".to_string(),
        });
    }
    Ok(present)
}

/// Balance one pair of opposing sides until both reach the same span, at
/// least `target` long.
///
/// Growth rules per side, by present interior shape count:
/// - 1 shape: it is the side's sole stretch point.
/// - 2 shapes: the fixed one lands exactly once, the elastic one grows.
/// - 3 shapes: all fixed ones land exactly once; if both outer slots are
///   elastic they alternate growth rounds, otherwise the single elastic
///   slot grows.
///
/// An elastic slot only grows while it has no quota yet, its side is below
/// target, or the two sides are unequal. That gate stops growth the moment
/// convergence is reached.
pub(crate) fn balance_pair(
    design: &Design,
    first: &'static Side,
    second: &'static Side,
    extent: Extent,
    target: usize,
) -> Result<PairPlan, BoxError> {
    let sides = [first, second];
    let counts = [
        validate_side(design, first)?,
        validate_side(design, second)?,
    ];

    debug!(
        "balancing {}/{}: target {target}, interior shape counts {counts:?}",
        first.id(),
        second.id()
    );

    let mut quotas: [Quotas; 2] = [[0; 3]; 2];
    let mut len = [0usize; 2];
    // Which outer slot grew last, per side (3-shape case with two elastics).
    let mut toggle = [0usize; 2];

    loop {
        // Advance whichever side is behind; ties advance the first side.
        let cur = usize::from(len[0] > len[1]);
        let interior = sides[cur].interior();

        match counts[cur] {
            1 => {
                for (slot, pos) in interior.into_iter().enumerate() {
                    let s = design.shape(pos);
                    if s.is_empty() {
                        continue;
                    }
                    if quotas[cur][slot] == 0 || len[cur] < target || len[0] != len[1] {
                        let step = extent.of(s);
                        quotas[cur][slot] += step;
                        len[cur] += step;
                    }
                    break;
                }
            }
            2 => {
                // The fixed shape lands exactly once, on the first pass.
                for (slot, pos) in interior.into_iter().enumerate() {
                    let s = design.shape(pos);
                    if !s.is_empty() && !s.elastic() && quotas[cur][slot] == 0 {
                        let step = extent.of(s);
                        quotas[cur][slot] += step;
                        len[cur] += step;
                        break;
                    }
                }
                for (slot, pos) in interior.into_iter().enumerate() {
                    let s = design.shape(pos);
                    if !s.is_empty() && s.elastic() {
                        if quotas[cur][slot] == 0 || len[cur] < target || len[0] != len[1] {
                            let step = extent.of(s);
                            quotas[cur][slot] += step;
                            len[cur] += step;
                        }
                        break;
                    }
                }
            }
            3 => {
                // Every fixed shape lands exactly once.
                for (slot, pos) in interior.into_iter().enumerate() {
                    let s = design.shape(pos);
                    if !s.is_empty() && !s.elastic() && quotas[cur][slot] == 0 {
                        let step = extent.of(s);
                        quotas[cur][slot] += step;
                        len[cur] += step;
                    }
                }
                if design.shape(interior[0]).elastic() && design.shape(interior[2]).elastic() {
                    // Two elastic outer slots alternate rounds so neither
                    // monopolizes the growth.
                    let slot = toggle[cur];
                    let s = design.shape(interior[slot]);
                    if quotas[cur][slot] == 0 || len[cur] < target || len[0] != len[1] {
                        let step = extent.of(s);
                        quotas[cur][slot] += step;
                        len[cur] += step;
                    }
                    toggle[cur] = if slot == 0 { 2 } else { 0 };
                } else {
                    for (slot, pos) in interior.into_iter().enumerate() {
                        let s = design.shape(pos);
                        if s.elastic() {
                            if quotas[cur][slot] == 0 || len[cur] < target || len[0] != len[1] {
                                let step = extent.of(s);
                                quotas[cur][slot] += step;
                                len[cur] += step;
                            }
                            break;
                        }
                    }
                }
            }
            count => {
                return Err(BoxError::InvariantViolation {
                    design: design.name.clone(),
                    side: sides[cur].id(),
                    details: format!("{count} interior shapes present, expected 1 to 3"),
                });
            }
        }

        trace!("{} at {}, {} at {}", first.id(), len[0], second.id(), len[1]);

        if len[0] == len[1] && len[0] >= target {
            break;
        }
    }

    debug!("{}/{} converged at span {}", first.id(), second.id(), len[0]);

    Ok(PairPlan {
        first: quotas[0],
        second: quotas[1],
        span: len[0],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compass::{SideId, side};

    fn shape(rows: &[&str], elastic: bool) -> Shape {
        Shape::new(rows.iter().copied(), elastic).unwrap()
    }

    fn set(design: &mut Design, pos: Compass, rows: &[&str], elastic: bool) {
        design.shapes[pos.index()] = shape(rows, elastic);
    }

    /// Plain rectangle: `+` corners, `-`/`|` elastic edges.
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

    fn balance_horizontal(design: &Design, target: usize) -> Result<PairPlan, BoxError> {
        balance_pair(
            design,
            side(SideId::Top),
            side(SideId::Bottom),
            Extent::Columns,
            target,
        )
    }

    #[test]
    fn test_single_elastic_converges_at_target() {
        let plan = balance_horizontal(&rectangle(), 5).unwrap();
        assert_eq!(plan.span, 5);
        assert_eq!(plan.first, [0, 5, 0]);
        assert_eq!(plan.second, [0, 5, 0]);
    }

    #[test]
    fn test_quota_conservation() {
        let mut d = rectangle();
        set(&mut d, Compass::Nnw, &["<<"], false);
        let plan = balance_horizontal(&d, 9).unwrap();
        assert_eq!(plan.first.iter().sum::<usize>(), plan.span);
        assert_eq!(plan.second.iter().sum::<usize>(), plan.span);
    }

    #[test]
    fn test_fixed_shape_lands_exactly_once() {
        let mut d = rectangle();
        set(&mut d, Compass::Nnw, &["<<"], false);
        let plan = balance_horizontal(&d, 7).unwrap();
        assert_eq!(plan.span, 7);
        // NNW keeps its own width, N absorbs the rest.
        assert_eq!(plan.first, [2, 5, 0]);
        assert_eq!(plan.second, [0, 7, 0]);
    }

    #[test]
    fn test_two_outer_elastics_alternate() {
        let mut d = rectangle();
        set(&mut d, Compass::Nnw, &["a"], true);
        set(&mut d, Compass::N, &["X"], false);
        set(&mut d, Compass::Nne, &["b"], true);
        let plan = balance_horizontal(&d, 5).unwrap();
        assert_eq!(plan.span, 5);
        // The toggle splits the slack evenly between the two outer slots.
        assert_eq!(plan.first, [2, 1, 2]);
    }

    #[test]
    fn test_wide_elastic_overshoots_until_parity() {
        // A 2-wide elastic against a 1-wide one: both sides still converge,
        // on the least common span at or above target.
        let mut d = rectangle();
        set(&mut d, Compass::N, &["=="], true);
        let plan = balance_horizontal(&d, 3).unwrap();
        assert_eq!(plan.span % 2, 0);
        assert!(plan.span >= 3);
        assert_eq!(plan.first.iter().sum::<usize>(), plan.span);
        assert_eq!(plan.second.iter().sum::<usize>(), plan.span);
    }

    #[test]
    fn test_vertical_pair_mirrors_horizontal() {
        let plan = balance_pair(
            &rectangle(),
            side(SideId::Left),
            side(SideId::Right),
            Extent::Rows,
            4,
        )
        .unwrap();
        assert_eq!(plan.span, 4);
        assert_eq!(plan.first, [0, 4, 0]);
        assert_eq!(plan.second, [0, 4, 0]);
    }

    #[test]
    fn test_side_without_interior_shapes_is_rejected() {
        let mut d = rectangle();
        d.shapes[Compass::N.index()] = Shape::empty();
        let err = balance_horizontal(&d, 3).unwrap_err();
        assert_eq!(
            err,
            BoxError::InvariantViolation {
                design: "rect".to_string(),
                side: SideId::Top,
                details: "no interior shapes present".to_string(),
            }
        );
    }

    #[test]
    fn test_side_without_elastic_shape_is_rejected() {
        let mut d = rectangle();
        set(&mut d, Compass::S, &["-"], false);
        let err = balance_horizontal(&d, 3).unwrap_err();
        assert_eq!(
            err,
            BoxError::InvariantViolation {
                design: "rect".to_string(),
                side: SideId::Bottom,
                details: "no elastic interior shape".to_string(),
            }
        );
    }

    #[test]
    fn test_target_honors_size_overrides() {
        let d = rectangle();
        let input = NormalizedInput::new(["hi"]);
        let opts = RenderOptions {
            min_width: Some(10),
            ..RenderOptions::default()
        };
        // 10 requested minus two 1-wide corners.
        assert_eq!(horizontal_target(&d, &input, &opts), 8);
        // Text wider than the minimum wins.
        let wide = NormalizedInput::new(["wider than ten chars"]);
        assert_eq!(horizontal_target(&d, &wide, &opts), 20);
    }

    #[test]
    fn test_vertical_target_from_line_count() {
        let d = rectangle();
        let input = NormalizedInput::new(["a", "b", "c"]);
        assert_eq!(vertical_target(&d, &input, &RenderOptions::default()), 3);
        let opts = RenderOptions {
            min_height: Some(7),
            ..RenderOptions::default()
        };
        assert_eq!(vertical_target(&d, &input, &opts), 5);
    }
}
