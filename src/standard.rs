//! Built-in metrics for standard PDF fonts, which viewers supply themselves and which
//! therefore never need embedding. Text set in them uses WinAnsiEncoding, so only the
//! characters that encoding can represent are reported as encodable.

use crate::{metrics::FontMetrics, Pt};

/// A standard (non-embedded) PDF font with built-in metrics
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StandardFont {
    #[default]
    Helvetica,
    Courier,
}

impl StandardFont {
    /// The PDF base font name
    pub fn pdf_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::Courier => "Courier",
        }
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        let ascender = match self {
            StandardFont::Helvetica => 718.0,
            StandardFont::Courier => 629.0,
        };
        size * ascender / 1000.0
    }

    /// Calculate the descent for the given font size. Like TrueType descents, this is negative
    pub fn descent(&self, size: Pt) -> Pt {
        let descender = match self {
            StandardFont::Helvetica => -207.0,
            StandardFont::Courier => -157.0,
        };
        size * descender / 1000.0
    }

    /// Advance width of a single character in glyph space, if the font can encode it
    pub fn char_width(&self, ch: char) -> Option<u16> {
        winansi_code(ch)?;
        Some(match self {
            StandardFont::Courier => 600,
            StandardFont::Helvetica => helvetica_width(ch),
        })
    }
}

impl FontMetrics for StandardFont {
    fn raw_width(&self, text: &str) -> f32 {
        text.chars()
            .filter_map(|ch| self.char_width(ch))
            .map(f32::from)
            .sum()
    }

    fn can_encode(&self, ch: char) -> bool {
        winansi_code(ch).is_some()
    }
}

/// Map a character to its WinAnsiEncoding byte, if it has one.
///
/// WinAnsiEncoding follows Windows-1252: printable ASCII and the Latin-1 supplement map
/// directly, and `0x80..=0x9F` hold typographic punctuation and a few extra letters.
pub fn winansi_code(ch: char) -> Option<u8> {
    let cp = ch as u32;
    if (0x20..=0x7E).contains(&cp) || (0xA0..=0xFF).contains(&cp) {
        return Some(cp as u8);
    }
    match ch {
        '\u{20AC}' => Some(0x80),
        '\u{201A}' => Some(0x82),
        '\u{0192}' => Some(0x83),
        '\u{201E}' => Some(0x84),
        '\u{2026}' => Some(0x85),
        '\u{2020}' => Some(0x86),
        '\u{2021}' => Some(0x87),
        '\u{02C6}' => Some(0x88),
        '\u{2030}' => Some(0x89),
        '\u{0160}' => Some(0x8A),
        '\u{2039}' => Some(0x8B),
        '\u{0152}' => Some(0x8C),
        '\u{017D}' => Some(0x8E),
        '\u{2018}' => Some(0x91),
        '\u{2019}' => Some(0x92),
        '\u{201C}' => Some(0x93),
        '\u{201D}' => Some(0x94),
        '\u{2022}' => Some(0x95),
        '\u{2013}' => Some(0x96),
        '\u{2014}' => Some(0x97),
        '\u{02DC}' => Some(0x98),
        '\u{2122}' => Some(0x99),
        '\u{0161}' => Some(0x9A),
        '\u{203A}' => Some(0x9B),
        '\u{0153}' => Some(0x9C),
        '\u{017E}' => Some(0x9E),
        '\u{0178}' => Some(0x9F),
        _ => None,
    }
}

// Helvetica AFM widths, 0x20..=0x7E
#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

// Helvetica AFM widths, 0xA0..=0xFF
#[rustfmt::skip]
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

fn helvetica_width(ch: char) -> u16 {
    let cp = ch as u32;
    match cp {
        0x20..=0x7E => HELVETICA_ASCII[(cp - 0x20) as usize],
        0xA0..=0xFF => HELVETICA_LATIN1[(cp - 0xA0) as usize],
        _ => match ch {
            '\u{201A}' | '\u{2018}' | '\u{2019}' => 222,
            '\u{2026}' | '\u{2030}' | '\u{0152}' | '\u{2014}' | '\u{2122}' => 1000,
            '\u{201E}' | '\u{02C6}' | '\u{2039}' | '\u{201C}' | '\u{201D}' | '\u{02DC}'
            | '\u{203A}' => 333,
            '\u{0160}' | '\u{0178}' => 667,
            '\u{017D}' => 611,
            '\u{2022}' => 350,
            '\u{0161}' | '\u{017E}' => 500,
            '\u{0153}' => 944,
            // euro, florin, daggers, en dash
            _ => 556,
        },
    }
}
