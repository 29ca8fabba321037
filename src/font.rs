use crate::{metrics::FontMetrics, Pt, WrapError};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// Glyph space units per em used by PDF text space. TrueType advances are normalised
/// to this before being reported through [FontMetrics].
const PDF_GLYPH_SPACE: f32 = 1000.0;

/// A parsed TrueType or OpenType font, used as a metrics source for layout.
///
/// Fonts are never modified by layout; one loaded font can be shared across threads
/// and reused for any number of wrapping calls.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, WrapError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse a font file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Font, WrapError> {
        let bytes = std::fs::read(path.as_ref())?;
        log::debug!(
            "loaded {} bytes of font data from {}",
            bytes.len(),
            path.as_ref().display()
        );
        Font::load(bytes)
    }

    /// Obtain the full name of the font, if the font carries one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the family name of the font, if the font carries one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        let leading = face.line_gap() as f32;
        let ascent = face.ascender() as f32;
        let descent = face.descender() as f32;
        self.scaling(size) * (leading + ascent - descent)
    }

    /// The glyph used to render `ch`, ignoring the `.notdef` glyph
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face
            .as_face_ref()
            .glyph_index(ch)
            .map(|i| i.0)
            .filter(|&id| id > 0)
    }

    fn advance(&self, ch: char) -> u16 {
        self.glyph_id(ch)
            .and_then(|gid| self.face.as_face_ref().glyph_hor_advance(GlyphId(gid)))
            .unwrap_or_default()
    }
}

impl FontMetrics for Font {
    fn raw_width(&self, text: &str) -> f32 {
        let scaling = PDF_GLYPH_SPACE / self.face.as_face_ref().units_per_em() as f32;
        text.chars()
            .map(|ch| self.advance(ch) as f32 * scaling)
            .sum()
    }

    fn can_encode(&self, ch: char) -> bool {
        self.glyph_id(ch).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{measure_width, wrap};

    fn dejavu_mono() -> Font {
        Font::load(include_bytes!("../assets/DejaVuSansMono.ttf").to_vec())
            .expect("can load DejaVu Sans Mono")
    }

    #[test]
    fn reads_names_and_vertical_metrics() {
        let font = dejavu_mono();
        assert_eq!(font.family().as_deref(), Some("DejaVu Sans Mono"));
        assert_eq!(font.name().as_deref(), Some("DejaVu Sans Mono"));

        // 2048 units per em, so a 2048pt size reads the raw font units back
        assert_eq!(font.ascent(Pt(2048.0)), Pt(1901.0));
        assert_eq!(font.descent(Pt(2048.0)), Pt(-483.0));
        assert_eq!(font.line_height(Pt(2048.0)), Pt(2384.0));
    }

    #[test]
    fn advances_are_normalised_to_pdf_glyph_space() {
        let font = dejavu_mono();
        // every glyph is 1233 of 2048 units wide
        assert_eq!(font.raw_width("a"), 602.05078125);
        assert_eq!(font.raw_width("λé€"), 3.0 * 602.05078125);
        assert_eq!(font.raw_width(""), 0.0);
    }

    #[test]
    fn only_mapped_glyphs_are_encodable() {
        let font = dejavu_mono();
        for ch in ['a', 'λ', 'é', '€', '?'] {
            assert!(font.can_encode(ch), "{ch:?} should be encodable");
            assert!(font.glyph_id(ch).is_some());
        }
        assert!(!font.can_encode('中'));
        assert_eq!(font.glyph_id('中'), None);
        // unencodable characters measure as the placeholder
        assert_eq!(
            measure_width(&font, Pt(12.0), "中"),
            measure_width(&font, Pt(12.0), "?")
        );
    }

    #[test]
    fn wraps_with_truetype_metrics() {
        let font = dejavu_mono();
        // 7 glyphs fit in 60pt at 12pt, 8 do not
        let lines = wrap(&font, Pt(12.0), "λόγος 中文 supercalifragilistic", Pt(60.0));
        assert_eq!(lines, vec!["λόγος", "中文", "superca", "lifragi", "listic"]);
        for line in lines.iter() {
            assert!(measure_width(&font, Pt(12.0), line) <= Pt(60.0));
        }
    }

    #[test]
    fn rejects_garbage_font_data() {
        let err = Font::load(b"definitely not a font".to_vec()).err();
        assert!(matches!(err, Some(WrapError::FaceParsing(_))));
    }

    #[test]
    fn reports_missing_font_files() {
        let err = Font::open("/nonexistent/font/file.ttf").err();
        assert!(matches!(err, Some(WrapError::Io(_))));
    }
}
