//! Hands laid out text to the PDF engine.
//!
//! Layout never draws anything itself: a [TextBlock] is turned into raw content stream
//! operators here, one text-show operation per line, which callers then place in a
//! page or form XObject stream through [pdf_writer].
//!
//! Text is written as single-byte WinAnsiEncoding strings, so this only suits blocks laid
//! out with a [StandardFont](crate::StandardFont) behind a Type1 font resource. A block
//! placed with a TrueType [Font](crate::Font) keeps characters such as `λ` in its lines,
//! and those are drawn here as `?`.

use crate::colour::Colour;
use crate::layout::{TextBlock, PLACEHOLDER};
use crate::standard::winansi_code;
use pdf_writer::{Filter, Pdf, Ref};
use std::io::Write;

/// Encode text for a standard font using WinAnsiEncoding, replacing anything the
/// encoding cannot represent with the placeholder
pub fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| winansi_code(ch).unwrap_or(PLACEHOLDER as u8))
        .collect()
}

/// Render a block of text into content stream operators, using the font resource
/// named `font_resource` (e.g. `F1`) in the enclosing page's resource dictionary.
///
/// `font_resource` must name a standard font with WinAnsiEncoding; see [encode_winansi].
#[allow(clippy::write_with_newline)]
pub fn render_block(
    block: &TextBlock,
    font_resource: &str,
    colour: Colour,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();
    if block.is_empty() {
        return Ok(content);
    }

    write!(&mut content, "q\n")?;
    write!(&mut content, "/{} {} Tf\n", font_resource, block.size.0)?;
    write_colour(&mut content, colour)?;

    for line in block.lines.iter() {
        write!(&mut content, "BT\n")?;
        write!(&mut content, "{} {} Td\n", line.x.0, line.y.0)?;
        write!(&mut content, "<")?;
        for byte in encode_winansi(&line.text) {
            write!(&mut content, "{byte:02x}")?;
        }
        write!(&mut content, "> Tj\n")?;
        write!(&mut content, "ET\n")?;
    }

    write!(&mut content, "Q\n")?;
    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} k\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

/// Deflate a content stream for use with `/FlateDecode`
pub fn compress(content: &[u8]) -> Vec<u8> {
    miniz_oxide::deflate::compress_to_vec_zlib(
        content,
        miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
    )
}

/// Write rendered content as a compressed stream object
pub fn write_stream(writer: &mut Pdf, id: Ref, content: &[u8]) {
    let compressed = compress(content);
    let mut stream = writer.stream(id, compressed.as_slice());
    stream.filter(Filter::FlateDecode);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::layout::Alignment;
    use crate::{Pt, Rect, StandardFont};

    fn block(text: &str) -> TextBlock {
        TextBlock::wrapped(
            &StandardFont::Helvetica,
            Pt(10.0),
            text,
            Rect::from_size(Pt(0.0), Pt(0.0), Pt(500.0), Pt(100.0)),
            Alignment::TopLeft,
        )
    }

    #[test]
    fn encodes_with_winansi() {
        assert_eq!(encode_winansi("Hi é€λ"), vec![0x48, 0x69, 0x20, 0xE9, 0x80, b'?']);
    }

    #[test]
    fn renders_one_show_per_line() {
        let rendered = render_block(&block("Hello"), "F1", colours::BLACK).expect("can render");
        let rendered = String::from_utf8(rendered).expect("ascii output");
        assert_eq!(rendered, "q\n/F1 10 Tf\n0 g\nBT\n0 100 Td\n<48656c6c6f> Tj\nET\nQ\n");
    }

    #[test]
    fn characters_outside_winansi_render_as_placeholders() {
        let rendered = render_block(&block("é λ"), "F1", colours::BLACK).expect("can render");
        let rendered = String::from_utf8(rendered).expect("ascii output");
        assert!(rendered.contains("<e9203f> Tj\n"));
    }

    #[test]
    fn empty_block_renders_nothing() {
        let rendered = render_block(&block("   "), "F1", colours::BLACK).expect("can render");
        assert!(rendered.is_empty());
    }

    #[test]
    fn writes_colours() {
        let rendered = render_block(&block("x"), "F2", Colour::new_rgb(1.0, 0.5, 0.0))
            .expect("can render");
        let rendered = String::from_utf8(rendered).expect("ascii output");
        assert!(rendered.contains("1 0.5 0 rg\n"));
    }

    #[test]
    fn compression_round_trips() {
        let data = b"BT /F1 10 Tf (hello) Tj ET".repeat(20);
        let compressed = compress(&data);
        assert!(compressed.len() < data.len());
        let restored =
            miniz_oxide::inflate::decompress_to_vec_zlib(&compressed).expect("can inflate");
        assert_eq!(restored, data);
    }

    #[test]
    fn writes_a_filtered_stream() {
        let mut pdf = Pdf::new();
        write_stream(&mut pdf, Ref::new(1), b"q Q");
        let bytes = pdf.finish();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Filter /FlateDecode"));
    }
}
