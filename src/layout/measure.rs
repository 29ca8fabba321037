use super::sanitize::sanitize_for;
use crate::{metrics::FontMetrics, Pt};

/// Glyph space units per em that widths are scaled against.
///
/// NOTE: this is 960, not the 1000 units widths are reported in, so measured widths run
/// about 4% wide. Changing it moves every line break.
pub const GLYPH_UNITS: f32 = 960.0;

/// Calculate the rendered width of `text` in `font` at the given size.
///
/// The text is sanitized against the font first so characters the font cannot encode
/// are measured as the placeholder rather than skipped. Empty text has zero width.
pub fn measure_width<F: FontMetrics + ?Sized>(font: &F, size: Pt, text: &str) -> Pt {
    if text.is_empty() {
        return Pt(0.0);
    }
    let clean = sanitize_for(text, font);
    Pt(font.raw_width(&clean) * size.0 / GLYPH_UNITS)
}
