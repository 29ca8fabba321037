/// A source of font metrics that layout can measure text against.
///
/// Widths are reported in PDF glyph space, where one em is 1000 units. Implementations
/// must be pure: the same input always yields the same answer, and neither query may
/// fail. Characters the source cannot encode should be reported through
/// [FontMetrics::can_encode] rather than by panicking in [FontMetrics::raw_width].
pub trait FontMetrics {
    /// The summed advance width of `text` in glyph space units
    fn raw_width(&self, text: &str) -> f32;

    /// Whether the font can render `ch`
    fn can_encode(&self, ch: char) -> bool;
}

impl<T: FontMetrics + ?Sized> FontMetrics for &T {
    fn raw_width(&self, text: &str) -> f32 {
        (**self).raw_width(text)
    }

    fn can_encode(&self, ch: char) -> bool {
        (**self).can_encode(ch)
    }
}

impl<T: FontMetrics + ?Sized> FontMetrics for Box<T> {
    fn raw_width(&self, text: &str) -> f32 {
        (**self).raw_width(text)
    }

    fn can_encode(&self, ch: char) -> bool {
        (**self).can_encode(ch)
    }
}

/// A prioritised fallback chain of fonts, measured as if it were a single font.
///
/// Each character is measured with the first font in the stack that can encode it.
/// Characters none of the fonts support are measured as the primary font's `?`.
#[derive(Default)]
pub struct FontStack {
    fonts: Vec<Box<dyn FontMetrics + Send + Sync>>,
}

impl FontStack {
    pub fn new() -> FontStack {
        FontStack::default()
    }

    /// Append a font to the end of the chain, making it the lowest priority so far
    pub fn with<F: FontMetrics + Send + Sync + 'static>(mut self, font: F) -> FontStack {
        self.fonts.push(Box::new(font));
        self
    }

    pub fn push<F: FontMetrics + Send + Sync + 'static>(&mut self, font: F) {
        self.fonts.push(Box::new(font));
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Borrow the chain in priority order, suitable for [crate::layout::sanitize]
    pub fn as_list(&self) -> Vec<&dyn FontMetrics> {
        self.fonts
            .iter()
            .map(|font| &**font as &dyn FontMetrics)
            .collect()
    }

    fn resolve(&self, ch: char) -> Option<&(dyn FontMetrics + Send + Sync)> {
        self.fonts
            .iter()
            .find(|font| font.can_encode(ch))
            .map(|font| &**font)
    }
}

impl FontMetrics for FontStack {
    fn raw_width(&self, text: &str) -> f32 {
        let mut buf = [0u8; 4];
        text.chars()
            .map(|ch| match self.resolve(ch) {
                Some(font) => font.raw_width(ch.encode_utf8(&mut buf)),
                None => self
                    .fonts
                    .first()
                    .map(|font| font.raw_width("?"))
                    .unwrap_or_default(),
            })
            .sum()
    }

    fn can_encode(&self, ch: char) -> bool {
        self.resolve(ch).is_some()
    }
}
