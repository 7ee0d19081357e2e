use pdf_writer::{Name, Pdf, Ref};

use crate::model::{FontWeight, MM_PER_PT};

/// Helvetica advance widths (1000 units/em) for printable ASCII 32..=126.
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 32-47
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // digits
    278, 278, 584, 584, 584, 556, 1015, // 58-64
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N-Z
    278, 278, 278, 469, 556, 333, // 91-96
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a-m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n-z
    334, 260, 334, 584, // 123-126
];

const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 32-47
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // digits
    333, 333, 584, 584, 584, 611, 975, // 58-64
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N-Z
    333, 278, 333, 584, 556, 333, // 91-96
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // a-m
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // n-z
    389, 280, 389, 584, // 123-126
];

/// Width used for WinAnsi bytes outside printable ASCII (Latin-1, typographic quotes, dashes).
const NON_ASCII_WIDTH: f32 = 556.0;

/// Resource name the content streams use for each face.
pub(crate) fn resource_name(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Regular => "F1",
        FontWeight::Bold => "F2",
    }
}

fn base_font(weight: FontWeight) -> &'static [u8] {
    match weight {
        FontWeight::Regular => b"Helvetica",
        FontWeight::Bold => b"Helvetica-Bold",
    }
}

/// Map a single Unicode char to its WinAnsi byte. Unmappable chars become `?`
/// so measured width and emitted glyphs stay in step.
pub(crate) fn char_to_winansi(c: char) -> u8 {
    match c as u32 {
        0x0020..=0x007E => c as u8,
        0x00A0..=0x00FF => c as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95, // bullet
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => b'?',
    }
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str encoding.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars().map(char_to_winansi).collect()
}

fn byte_width_1000(weight: FontWeight, byte: u8) -> f32 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA_ASCII,
        FontWeight::Bold => &HELVETICA_BOLD_ASCII,
    };
    match byte {
        32..=126 => table[(byte - 32) as usize] as f32,
        0..=31 | 127 => 0.0,
        _ => NON_ASCII_WIDTH,
    }
}

/// Advance width of `ch` at 1000 units/em.
pub(crate) fn char_width_1000(weight: FontWeight, ch: char) -> f32 {
    byte_width_1000(weight, char_to_winansi(ch))
}

/// Width of `text` in layout units (millimetres) at `font_size` points.
pub(crate) fn text_width(text: &str, weight: FontWeight, font_size: f32) -> f32 {
    let em: f32 = text.chars().map(|ch| char_width_1000(weight, ch)).sum();
    em * font_size / 1000.0 * MM_PER_PT
}

/// Register both Helvetica faces as base-14 Type1 fonts. Returns
/// `(resource name, font ref)` pairs for page resource dictionaries.
pub(crate) fn register_fonts(
    pdf: &mut Pdf,
    alloc: &mut impl FnMut() -> Ref,
) -> Vec<(&'static str, Ref)> {
    [FontWeight::Regular, FontWeight::Bold]
        .into_iter()
        .map(|weight| {
            let font_ref = alloc();
            pdf.type1_font(font_ref)
                .base_font(Name(base_font(weight)))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
            log::debug!(
                "register_font: {} as {}",
                String::from_utf8_lossy(base_font(weight)),
                resource_name(weight)
            );
            (resource_name(weight), font_ref)
        })
        .collect()
}
