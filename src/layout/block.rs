use super::{measure::measure_width, sanitize::sanitize_for, wrap::wrap};
use crate::{metrics::FontMetrics, Pt, Rect};

/// How a block of lines is positioned within its cell
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Alignment {
    /// The first baseline sits on the top-left corner of the cell, and later lines step
    /// down from it
    #[default]
    TopLeft,
    /// Each line is centred horizontally, and the block is centred vertically
    Centered,
    /// Lines start at the left edge of the cell, and the block is centred vertically
    VerticalCentered,
}

/// A single line of text with its baseline position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// The sanitized text, safe to hand to the renderer
    pub text: String,
    pub x: Pt,
    /// Baseline
    pub y: Pt,
    pub width: Pt,
}

/// Lines of text positioned within a cell, one font size apart
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub size: Pt,
    pub lines: Vec<PlacedLine>,
    /// Covers every line from its baseline up to one font size above it
    pub bounds: Rect,
}

impl TextBlock {
    /// Position already-wrapped lines within `cell`.
    ///
    /// Lines are spaced one font size apart. Top-left blocks anchor at `(cell.x1, cell.y2)`
    /// and put the first baseline there, so its glyphs rise above the cell. Horizontally
    /// centred lines are centred on the middle of the cell, and vertically centred blocks
    /// are centred around the middle line. Lines are not clipped to the cell, so callers
    /// should wrap to the cell's width first (see [TextBlock::wrapped]).
    pub fn place<F: FontMetrics + ?Sized, S: AsRef<str>>(
        font: &F,
        size: Pt,
        lines: &[S],
        cell: Rect,
        alignment: Alignment,
    ) -> TextBlock {
        let count = lines.len();
        let middle = (count / 2) as f32;

        let lift = match alignment {
            Alignment::VerticalCentered => size / 3.0,
            _ => size / 2.0,
        };
        let mut center_y = cell.y2 - cell.height() / 2.0 - lift;
        if count % 2 == 0 {
            center_y -= size / 2.0;
        }

        let lines: Vec<PlacedLine> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let text = sanitize_for(line.as_ref(), font);
                let width = measure_width(font, size, &text);
                let centred_y = center_y + size * (middle - i as f32);
                let (x, y) = match alignment {
                    Alignment::TopLeft => (cell.x1, cell.y2 - size * i as f32),
                    Alignment::Centered => (cell.center_x() - width / 2.0, centred_y),
                    Alignment::VerticalCentered => (cell.x1, centred_y),
                };
                PlacedLine { text, x, y, width }
            })
            .collect();

        let bounds = lines
            .iter()
            .map(|line| Rect::from_size(line.x, line.y, line.width, size))
            .reduce(|a, b| a.union(&b))
            .unwrap_or(Rect {
                x1: cell.x1,
                y1: cell.y2,
                x2: cell.x1,
                y2: cell.y2,
            });

        TextBlock {
            size,
            lines,
            bounds,
        }
    }

    /// Wrap `text` to the width of `cell` and position the resulting lines in it
    pub fn wrapped<F: FontMetrics + ?Sized>(
        font: &F,
        size: Pt,
        text: &str,
        cell: Rect,
        alignment: Alignment,
    ) -> TextBlock {
        let lines = wrap(font, size, text, cell.width());
        TextBlock::place(font, size, lines.as_slice(), cell, alignment)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Rough height needed for `line_count` lines, with one line of slack
pub fn approximate_height(line_count: usize, size: Pt) -> Pt {
    size * (line_count as f32 + 1.0)
}

/// Place a single line of text so that it is horizontally centred on `x`
pub fn center_text<F: FontMetrics + ?Sized>(
    font: &F,
    size: Pt,
    x: Pt,
    y: Pt,
    text: &str,
) -> PlacedLine {
    let text = sanitize_for(text, font);
    let width = measure_width(font, size, &text);
    PlacedLine {
        text,
        x: x - width / 2.0,
        y,
        width,
    }
}
