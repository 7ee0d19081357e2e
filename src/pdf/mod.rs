//! Serialize a [`RenderedDocument`] to PDF bytes.
//!
//! Layout coordinates are millimetres from the top-left corner; PDF user space
//! is points from the bottom-left, so every y is flipped against the page height.

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::error::{Error, Result};
use crate::fonts::{register_fonts, resource_name, to_winansi_bytes};
use crate::model::{DrawOp, Page, PlacedImage, RenderedDocument, TextRun};

const PT_PER_MM: f32 = 72.0 / 25.4;

fn pt(v: f32) -> f32 {
    v * PT_PER_MM
}

fn rgb(color: [u8; 3]) -> (f32, f32, f32) {
    (
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
    )
}

/// Flips a top-down layout y into PDF space for one page.
struct PageSpace {
    height_mm: f32,
}

impl PageSpace {
    fn y(&self, y_mm: f32) -> f32 {
        pt(self.height_mm - y_mm)
    }
}

pub fn write_pdf(doc: &RenderedDocument) -> Result<Vec<u8>> {
    let t0 = std::time::Instant::now();
    if doc.pages().is_empty() {
        return Err(Error::DocumentBuild("document has no pages".to_string()));
    }

    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let info_id = alloc();

    let font_pairs = register_fonts(&mut pdf, &mut alloc);

    // Phase 1: embed every placed image as a DCT XObject, named per document.
    let mut page_xobjects: Vec<Vec<(String, Ref)>> = Vec::with_capacity(doc.page_count());
    let mut image_count = 0usize;
    for page in doc.pages() {
        let mut names = Vec::new();
        for img in page.images() {
            let xobj_ref = alloc();
            image_count += 1;
            let name = format!("Im{image_count}");
            embed_jpeg(&mut pdf, xobj_ref, img);
            names.push((name, xobj_ref));
        }
        page_xobjects.push(names);
    }
    let t_images = t0.elapsed();

    // Phase 2: content streams
    let contents: Vec<Content> = doc
        .pages()
        .iter()
        .zip(&page_xobjects)
        .map(|(page, names)| page_content(page, names))
        .collect();

    // Phase 3: page tree
    let n = contents.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, c) in contents.into_iter().enumerate() {
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&c.finish(), 6);
        pdf.stream(content_ids[i], &compressed)
            .filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);
    pdf.document_info(info_id)
        .title(TextStr(doc.title()))
        .producer(TextStr(concat!("instruction-sheet ", env!("CARGO_PKG_VERSION"))));

    for (i, page) in doc.pages().iter().enumerate() {
        let mut pdf_page = pdf.page(page_ids[i]);
        pdf_page
            .media_box(Rect::new(0.0, 0.0, pt(page.size.width), pt(page.size.height)))
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = pdf_page.resources();
        {
            let mut fonts = resources.fonts();
            for (name, font_ref) in &font_pairs {
                fonts.pair(Name(name.as_bytes()), *font_ref);
            }
        }
        if !page_xobjects[i].is_empty() {
            let mut xobjects = resources.x_objects();
            for (name, xobj_ref) in &page_xobjects[i] {
                xobjects.pair(Name(name.as_bytes()), *xobj_ref);
            }
        }
    }

    let bytes = pdf.finish();
    log::info!(
        "PDF: {} pages, {} images, embed={:.1}ms, total={:.1}ms, {} bytes",
        n,
        image_count,
        t_images.as_secs_f64() * 1000.0,
        t0.elapsed().as_secs_f64() * 1000.0,
        bytes.len(),
    );
    Ok(bytes)
}

fn embed_jpeg(pdf: &mut Pdf, xobj_ref: Ref, img: &PlacedImage) {
    let mut xobj = pdf.image_xobject(xobj_ref, &img.image.data);
    xobj.filter(Filter::DctDecode);
    xobj.width(img.image.pixel_width as i32);
    xobj.height(img.image.pixel_height as i32);
    xobj.color_space().device_rgb();
    xobj.bits_per_component(8);
}

fn page_content(page: &Page, xobject_names: &[(String, Ref)]) -> Content {
    let space = PageSpace {
        height_mm: page.size.height,
    };
    let mut content = Content::new();
    let mut next_image = xobject_names.iter();

    for op in &page.ops {
        match op {
            DrawOp::FillRect { rect, color } => {
                let (r, g, b) = rgb(*color);
                content.save_state();
                content.set_fill_rgb(r, g, b);
                content.rect(
                    pt(rect.x),
                    space.y(rect.bottom()),
                    pt(rect.width),
                    pt(rect.height),
                );
                content.fill_nonzero();
                content.restore_state();
            }
            DrawOp::StrokeRect {
                rect,
                color,
                line_width,
            } => {
                let (r, g, b) = rgb(*color);
                content.save_state();
                content.set_line_width(pt(*line_width));
                content.set_stroke_rgb(r, g, b);
                content.rect(
                    pt(rect.x),
                    space.y(rect.bottom()),
                    pt(rect.width),
                    pt(rect.height),
                );
                content.stroke();
                content.restore_state();
            }
            DrawOp::Line {
                from,
                to,
                color,
                line_width,
            } => {
                let (r, g, b) = rgb(*color);
                content.save_state();
                content.set_line_width(pt(*line_width));
                content.set_stroke_rgb(r, g, b);
                content.move_to(pt(from.0), space.y(from.1));
                content.line_to(pt(to.0), space.y(to.1));
                content.stroke();
                content.restore_state();
            }
            DrawOp::Text(run) => write_text(&mut content, &space, run),
            DrawOp::Image(img) => {
                // Names were allocated in the same op order by write_pdf.
                let Some((name, _)) = next_image.next() else {
                    continue;
                };
                content.save_state();
                content.transform([
                    pt(img.rect.width),
                    0.0,
                    0.0,
                    pt(img.rect.height),
                    pt(img.rect.x),
                    space.y(img.rect.bottom()),
                ]);
                content.x_object(Name(name.as_bytes()));
                content.restore_state();
            }
        }
    }
    content
}

fn write_text(content: &mut Content, space: &PageSpace, run: &TextRun) {
    let (r, g, b) = rgb(run.color);
    content.save_state();
    content.set_fill_rgb(r, g, b);
    content.begin_text();
    content.set_font(Name(resource_name(run.weight).as_bytes()), run.font_size);
    content.next_line(pt(run.x), space.y(run.baseline));
    content.show(Str(&to_winansi_bytes(&run.text)));
    content.end_text();
    content.restore_state();
}
