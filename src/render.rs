//! The compositor: placing the text block inside an assembled box and
//! emitting the final output rows.

use log::debug;

use crate::assemble::FinalBox;
use crate::design::Design;
use crate::error::BoxError;
use crate::input::{HAlign, NormalizedInput, RenderOptions, VAlign};

/// Render `input` inside a box drawn with `design`.
///
/// Returns the complete output rows, top to bottom, with trailing blanks
/// trimmed. Empty input (no lines at all) renders nothing.
pub fn render_box(
    design: &Design,
    input: &NormalizedInput,
    opts: &RenderOptions,
) -> Result<Vec<String>, BoxError> {
    if input.is_empty() {
        debug!("empty input, nothing to draw");
        return Ok(Vec::new());
    }
    let fb = FinalBox::build(design, input, opts)?;
    Ok(compose(&fb, input, opts))
}

/// Render a design's own sample text with default options.
///
/// Design listings use this to show each style as its author intended.
pub fn render_sample(design: &Design) -> Result<Vec<String>, BoxError> {
    let input = NormalizedInput::new(design.sample.lines());
    render_box(design, &input, &RenderOptions::default())
}

fn compose(fb: &FinalBox, input: &NormalizedInput, opts: &RenderOptions) -> Vec<String> {
    let indent = " ".repeat(input.indent());

    // Vertical slack and its share above the text block.
    let vfill = fb.vspace - input.line_count();
    let vfill_above = match opts.valign {
        VAlign::Top => 0,
        VAlign::Bottom => vfill,
        VAlign::Center => vfill / 2,
    };

    // Horizontal slack, split around every text line.
    let hfill = fb.hspace - input.max_width();
    let (pad_left, pad_right) = split_hfill(hfill, opts.halign);
    let pad_left = " ".repeat(pad_left);
    let pad_right = " ".repeat(pad_right);
    let blank = " ".repeat(fb.hspace);

    let mut out = Vec::with_capacity(fb.height());
    for row in fb.top.rows() {
        out.push(trim_trailing(format!("{indent}{row}")));
    }
    for j in 0..fb.vspace {
        let mut row = String::with_capacity(input.indent() + fb.width());
        row.push_str(&indent);
        row.push_str(fb.left.row(j));
        match j.checked_sub(vfill_above).and_then(|ti| input.line(ti)) {
            Some(line) => {
                row.push_str(&pad_left);
                row.push_str(line.text());
                row.push_str(&" ".repeat(input.max_width() - line.len()));
                row.push_str(&pad_right);
            }
            None => row.push_str(&blank),
        }
        row.push_str(fb.right.row(j));
        out.push(trim_trailing(row));
    }
    for row in fb.bottom.rows() {
        out.push(trim_trailing(format!("{indent}{row}")));
    }
    out
}

/// Split horizontal slack into (left, right) padding.
///
/// A single slack column goes where the text is pushed away from; centering
/// puts the odd column on the right.
fn split_hfill(hfill: usize, halign: HAlign) -> (usize, usize) {
    if hfill == 0 {
        return (0, 0);
    }
    if hfill == 1 {
        return match halign {
            HAlign::Right => (1, 0),
            HAlign::Left | HAlign::Center => (0, 1),
        };
    }
    match halign {
        HAlign::Left => (0, hfill),
        HAlign::Right => (hfill, 0),
        HAlign::Center => (hfill / 2, hfill - hfill / 2),
    }
}

/// Drop trailing spaces and tabs from a finished output row.
fn trim_trailing(mut row: String) -> String {
    row.truncate(row.trim_end_matches([' ', '\t']).len());
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hfill_none() {
        assert_eq!(split_hfill(0, HAlign::Left), (0, 0));
        assert_eq!(split_hfill(0, HAlign::Center), (0, 0));
    }

    #[test]
    fn test_split_hfill_single_column() {
        assert_eq!(split_hfill(1, HAlign::Left), (0, 1));
        assert_eq!(split_hfill(1, HAlign::Center), (0, 1));
        assert_eq!(split_hfill(1, HAlign::Right), (1, 0));
    }

    #[test]
    fn test_split_hfill_general() {
        assert_eq!(split_hfill(4, HAlign::Left), (0, 4));
        assert_eq!(split_hfill(4, HAlign::Right), (4, 0));
        assert_eq!(split_hfill(4, HAlign::Center), (2, 2));
        // Odd remainder lands on the right.
        assert_eq!(split_hfill(5, HAlign::Center), (2, 3));
    }

    #[test]
    fn test_trim_trailing_spaces_and_tabs() {
        assert_eq!(trim_trailing("| x | \t ".to_string()), "| x |");
        assert_eq!(trim_trailing("   ".to_string()), "");
        assert_eq!(trim_trailing(" a".to_string()), " a");
    }
}
