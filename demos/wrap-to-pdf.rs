use pdf_wrap::layout::{Alignment, TextBlock};
use pdf_wrap::pdf_writer::{Finish, Name, Pdf, Ref};
use pdf_wrap::render;
use pdf_wrap::{colours, Colour, In, Pt, Rect, StandardFont};

fn main() {
    env_logger::init();

    let (width, height): (Pt, Pt) = (In(8.5).into(), In(11.0).into());
    let margin: Pt = In(1.0).into();
    let font = StandardFont::Helvetica;

    let text = format!(
        "{} https://example.com/a/very/long/url/that/needs/breaking/somewhere",
        lipsum::lipsum(120)
    );

    // body text down the left half of the page, a centred caption in a box on the right.
    // the first body baseline sits on the cell top, so drop the cell by one line
    let body = TextBlock::wrapped(
        &font,
        Pt(11.0),
        &text,
        Rect::from_size(margin, margin, Pt(240.0), height - margin * 2.0 - Pt(11.0)),
        Alignment::TopLeft,
    );
    let caption = TextBlock::wrapped(
        &font,
        Pt(14.0),
        "Centred caption text with ünïcödé and 日本語 placeholders",
        Rect::from_size(Pt(340.0), Pt(500.0), Pt(180.0), Pt(120.0)),
        Alignment::Centered,
    );

    let mut content = render::render_block(&body, "F1", colours::BLACK).expect("can render body");
    let link_blue = Colour::from_hex("#46759E").unwrap_or_default();
    content.extend(render::render_block(&caption, "F1", link_blue).expect("can render caption"));

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let font_id = Ref::new(4);
    let content_id = Ref::new(5);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(Rect::from_size(Pt(0.0), Pt(0.0), width, height).into());
    page.parent(page_tree_id);
    page.contents(content_id);
    page.resources().fonts().pair(Name(b"F1"), font_id);
    page.finish();

    pdf.type1_font(font_id)
        .base_font(Name(font.pdf_name().as_bytes()))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    render::write_stream(&mut pdf, content_id, &content);

    std::fs::write("wrap-to-pdf.pdf", pdf.finish()).expect("can write pdf");
    println!(
        "wrote {} body lines and {} caption lines to wrap-to-pdf.pdf",
        body.lines.len(),
        caption.lines.len()
    );
}
