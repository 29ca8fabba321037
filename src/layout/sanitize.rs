use crate::metrics::FontMetrics;

/// Character substituted for anything none of the candidate fonts can render
pub const PLACEHOLDER: char = '?';

/// Replace every character that no font in `fonts` can encode with [PLACEHOLDER].
///
/// Fonts are probed in order and the first one that can encode a character wins. The
/// output always has exactly as many characters as the input, so character positions
/// in the original text remain valid in the sanitized text.
///
/// ```
/// use pdf_wrap::{layout::sanitize, FontMetrics, StandardFont};
///
/// let fonts: [&dyn FontMetrics; 1] = [&StandardFont::Helvetica];
/// assert_eq!(sanitize("naïve λ", &fonts), "naïve ?");
/// ```
pub fn sanitize(text: &str, fonts: &[&dyn FontMetrics]) -> String {
    text.chars()
        .map(|ch| {
            if fonts.iter().any(|font| font.can_encode(ch)) {
                ch
            } else {
                PLACEHOLDER
            }
        })
        .collect()
}

/// [sanitize] against a single font
pub fn sanitize_for<F: FontMetrics + ?Sized>(text: &str, font: &F) -> String {
    text.chars()
        .map(|ch| if font.can_encode(ch) { ch } else { PLACEHOLDER })
        .collect()
}
