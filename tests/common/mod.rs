#![allow(dead_code)]

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use instruction_sheet::model::{DrawOp, Page};
use instruction_sheet::{FIELD_ORDER, FieldKey, FieldRecord, ImageAsset};

/// All 16 fields filled with in-vocabulary values, `aspect_ratio = 16:9`.
pub fn full_record() -> FieldRecord {
    let values = [
        "SNS Post",
        "Human",
        "Standing",
        "Young adult / 20–29 years",
        "Female",
        "Japan",
        "Realistic",
        "Full shot",
        "Eye-level",
        "Natural light",
        "Park",
        "Tokyo",
        "Park / Plaza",
        "PNG",
        "16:9",
        "Soft smile, holding a coffee cup",
    ];
    FIELD_ORDER
        .into_iter()
        .zip(values)
        .fold(FieldRecord::new(), |r, (key, value)| r.with(key, value))
}

pub fn record_with_aspect(label: &str) -> FieldRecord {
    full_record().with(FieldKey::AspectRatio, label)
}

fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format)
        .expect("encode fixture image");
    buf
}

pub fn solid_png(width: u32, height: u32, color: [u8; 3]) -> ImageAsset {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    ImageAsset::from_encoded(encode(&img, ImageFormat::Png)).expect("fixture png")
}

pub fn solid_jpeg(width: u32, height: u32, color: [u8; 3]) -> ImageAsset {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    ImageAsset::from_encoded(encode(&img, ImageFormat::Jpeg)).expect("fixture jpeg")
}

/// Three vertical bands: `edge` | `middle` | `edge`, the middle band `middle_width` wide.
pub fn banded_png(width: u32, height: u32, middle_width: u32, edge: [u8; 3], middle: [u8; 3]) -> ImageAsset {
    let left = (width - middle_width) / 2;
    let img = RgbImage::from_fn(width, height, |x, _| {
        if x >= left && x < left + middle_width {
            Rgb(middle)
        } else {
            Rgb(edge)
        }
    });
    ImageAsset::from_encoded(encode(&img, ImageFormat::Png)).expect("fixture png")
}

/// Three horizontal bands, the middle one `middle_height` tall.
pub fn stacked_png(width: u32, height: u32, middle_height: u32, edge: [u8; 3], middle: [u8; 3]) -> ImageAsset {
    let top = (height - middle_height) / 2;
    let img = RgbImage::from_fn(width, height, |_, y| {
        if y >= top && y < top + middle_height {
            Rgb(middle)
        } else {
            Rgb(edge)
        }
    });
    ImageAsset::from_encoded(encode(&img, ImageFormat::Png)).expect("fixture png")
}

/// Bytes that no decoder accepts, declared with plausible dimensions.
pub fn corrupt_asset() -> ImageAsset {
    ImageAsset::new(b"\x89PNG\r\n\x1a\nthis is not really a png".to_vec(), 640, 480)
}

pub fn stroke_rect_count(page: &Page) -> usize {
    page.ops
        .iter()
        .filter(|op| matches!(op, DrawOp::StrokeRect { .. }))
        .count()
}

pub fn assert_close(actual: f32, expected: f32, tol: f32) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}
