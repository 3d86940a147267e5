//! Compass positions and box-side views.
//!
//! A box design places 16 glyphs clockwise around a rectangle, named after
//! compass points (`NW` at the top-left, continuing clockwise through `NE`,
//! `SE`, and `SW`). Each of the four sides is a fixed view of 5 positions
//! whose first and last entries are corners shared with the adjacent sides.
//! Modelling sides as derived index lists keeps the corner glyphs owned in
//! exactly one place, the design's shape table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of positions per side view, corners included.
pub const SHAPES_PER_SIDE: usize = 5;

/// The 16 glyph positions of a box design, clockwise from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Compass {
    Nw,
    Nnw,
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
}

impl Compass {
    /// Total number of compass positions.
    pub const COUNT: usize = 16;

    /// All positions in clockwise order, starting at the top-left corner.
    pub const ALL: [Compass; Compass::COUNT] = [
        Compass::Nw,
        Compass::Nnw,
        Compass::N,
        Compass::Nne,
        Compass::Ne,
        Compass::Ene,
        Compass::E,
        Compass::Ese,
        Compass::Se,
        Compass::Sse,
        Compass::S,
        Compass::Ssw,
        Compass::Sw,
        Compass::Wsw,
        Compass::W,
        Compass::Wnw,
    ];

    /// Index of this position into a design's shape table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// True iff this position is one of the four corners.
    pub fn is_corner(self) -> bool {
        matches!(self, Compass::Nw | Compass::Ne | Compass::Se | Compass::Sw)
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compass::Nw => "NW",
            Compass::Nnw => "NNW",
            Compass::N => "N",
            Compass::Nne => "NNE",
            Compass::Ne => "NE",
            Compass::Ene => "ENE",
            Compass::E => "E",
            Compass::Ese => "ESE",
            Compass::Se => "SE",
            Compass::Sse => "SSE",
            Compass::S => "S",
            Compass::Ssw => "SSW",
            Compass::Sw => "SW",
            Compass::Wsw => "WSW",
            Compass::W => "W",
            Compass::Wnw => "WNW",
        };
        f.write_str(name)
    }
}

/// Identifies one of the four box sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideId {
    Top,
    Right,
    Bottom,
    Left,
}

impl fmt::Display for SideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SideId::Top => "top",
            SideId::Right => "right",
            SideId::Bottom => "bottom",
            SideId::Left => "left",
        };
        f.write_str(name)
    }
}

/// A non-owning view of one box side: 5 compass positions in clockwise order.
///
/// Positions 0 and 4 are the corners shared with the two adjacent sides; the
/// three positions in between are the side's interior slots.
#[derive(Debug, PartialEq, Eq)]
pub struct Side {
    id: SideId,
    positions: [Compass; SHAPES_PER_SIDE],
}

/// The four side views in clockwise order (top, right, bottom, left).
pub const SIDES: [Side; 4] = [
    Side {
        id: SideId::Top,
        positions: [Compass::Nw, Compass::Nnw, Compass::N, Compass::Nne, Compass::Ne],
    },
    Side {
        id: SideId::Right,
        positions: [Compass::Ne, Compass::Ene, Compass::E, Compass::Ese, Compass::Se],
    },
    Side {
        id: SideId::Bottom,
        positions: [Compass::Se, Compass::Sse, Compass::S, Compass::Ssw, Compass::Sw],
    },
    Side {
        id: SideId::Left,
        positions: [Compass::Sw, Compass::Wsw, Compass::W, Compass::Wnw, Compass::Nw],
    },
];

/// Look up the static view for a side.
pub fn side(id: SideId) -> &'static Side {
    match id {
        SideId::Top => &SIDES[0],
        SideId::Right => &SIDES[1],
        SideId::Bottom => &SIDES[2],
        SideId::Left => &SIDES[3],
    }
}

impl Side {
    /// Which side this view describes.
    pub fn id(&self) -> SideId {
        self.id
    }

    /// All 5 positions in clockwise order, corners first and last.
    pub fn positions(&self) -> &[Compass; SHAPES_PER_SIDE] {
        &self.positions
    }

    /// The side's two corners, in clockwise order.
    pub fn corners(&self) -> (Compass, Compass) {
        (self.positions[0], self.positions[SHAPES_PER_SIDE - 1])
    }

    /// The three interior (non-corner) positions, in clockwise order.
    pub fn interior(&self) -> [Compass; 3] {
        [self.positions[1], self.positions[2], self.positions[3]]
    }

    fn contains(&self, pos: Compass) -> bool {
        self.positions.contains(&pos)
    }
}

/// Return the side view containing `pos`.
///
/// Corners appear on two sides, so `occurrence` selects the first (0) or
/// second (1) match in clockwise side order; non-corner positions only have
/// occurrence 0. Returns `None` when no further occurrence exists.
pub fn side_containing(pos: Compass, occurrence: usize) -> Option<&'static Side> {
    let mut found = 0;
    for s in &SIDES {
        if s.contains(pos) {
            if found == occurrence {
                return Some(s);
            }
            found += 1;
        }
    }
    None
}

/// Return the side containing both positions, or `None` if they do not share
/// one.
pub fn common_side(a: Compass, b: Compass) -> Option<&'static Side> {
    SIDES.iter().find(|s| s.contains(a) && s.contains(b))
}

/// Number of steps between two positions along their common side.
///
/// Equal positions are 0 steps apart. Returns `None` when the positions do
/// not share a side, e.g. `angular_distance(Nw, Se)`.
pub fn angular_distance(a: Compass, b: Compass) -> Option<usize> {
    if a == b {
        return Some(0);
    }
    let s = common_side(a, b)?;
    let ia = s.positions.iter().position(|&p| p == a)?;
    let ib = s.positions.iter().position(|&p| p == b)?;
    Some(ia.abs_diff(ib))
}
