//! Center-crop a source image to the grid cell's aspect ratio.
//!
//! Decoding and resampling are CPU-bound, so [`crop`] hands them to
//! `tokio::task::spawn_blocking` and the caller awaits each image in turn.

use std::sync::Arc;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use crate::config::CropConfig;
use crate::error::{Error, Result};
use crate::model::{CroppedImage, ImageAsset};

/// Source-pixel rectangle kept by the crop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Largest centered region of a `source_width × source_height` image whose
/// width/height equals `target_aspect`. The over-sized dimension is trimmed
/// equally from both sides; the other is kept whole.
pub fn crop_region(source_width: u32, source_height: u32, target_aspect: f64) -> CropRegion {
    let (w, h) = (source_width as f64, source_height as f64);
    let source_aspect = w / h;
    if source_aspect > target_aspect {
        let width = h * target_aspect;
        CropRegion {
            x: (w - width) / 2.0,
            y: 0.0,
            width,
            height: h,
        }
    } else {
        let height = w / target_aspect;
        CropRegion {
            x: 0.0,
            y: (h - height) / 2.0,
            width: w,
            height,
        }
    }
}

/// Pixel size of the cropped output for a cell of `target_width × target_height` units.
pub fn output_size(target_width: f32, target_height: f32, oversample: f32) -> (u32, u32) {
    let px = |v: f32| ((v * oversample).round() as u32).max(1);
    (px(target_width), px(target_height))
}

/// Crop `image` to fill `target_width × target_height` exactly.
///
/// Fails with [`Error::ImageDecode`] if the bytes cannot be decoded or the
/// worker dies; the caller leaves that cell blank. Non-positive targets are a
/// layout bug and fail with [`Error::DocumentBuild`].
pub async fn crop(
    image: &ImageAsset,
    target_width: f32,
    target_height: f32,
    config: &CropConfig,
) -> Result<CroppedImage> {
    if !(target_width > 0.0 && target_height > 0.0) {
        return Err(Error::DocumentBuild(format!(
            "crop target {target_width}x{target_height} is not positive"
        )));
    }
    let bytes = image.shared_bytes();
    let out = output_size(target_width, target_height, config.oversample);
    let aspect = target_width as f64 / target_height as f64;
    let quality = config.jpeg_quality;

    tokio::task::spawn_blocking(move || crop_blocking(&bytes, aspect, out, quality))
        .await
        .map_err(|e| Error::ImageDecode {
            reason: format!("crop task failed: {e}"),
        })?
}

fn crop_blocking(
    bytes: &[u8],
    target_aspect: f64,
    (out_w, out_h): (u32, u32),
    quality: u8,
) -> Result<CroppedImage> {
    let t0 = std::time::Instant::now();
    let decoded = image::load_from_memory(bytes)?;
    let (src_w, src_h) = (decoded.width(), decoded.height());
    if src_w == 0 || src_h == 0 {
        return Err(Error::ImageDecode {
            reason: "image has no pixels".to_string(),
        });
    }

    let region = crop_region(src_w, src_h, target_aspect);
    let x = (region.x.round() as u32).min(src_w - 1);
    let y = (region.y.round() as u32).min(src_h - 1);
    let w = (region.width.round() as u32).clamp(1, src_w - x);
    let h = (region.height.round() as u32).clamp(1, src_h - y);

    let rgb = decoded
        .crop_imm(x, y, w, h)
        .resize_exact(out_w, out_h, FilterType::CatmullRom)
        .to_rgb8();

    let mut data = Vec::new();
    JpegEncoder::new_with_quality(&mut data, quality).encode_image(&rgb)?;

    log::debug!(
        "crop {src_w}x{src_h} -> region {w}x{h}+{x}+{y} -> {out_w}x{out_h} jpeg {} bytes in {:.1}ms",
        data.len(),
        t0.elapsed().as_secs_f64() * 1000.0,
    );

    Ok(CroppedImage {
        data: Arc::from(data),
        pixel_width: out_w,
        pixel_height: out_h,
    })
}
