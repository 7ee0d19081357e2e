mod common;

use common::{banded_png, corrupt_asset, solid_jpeg, solid_png, stacked_png};
use image::{GenericImageView, Rgb};
use instruction_sheet::Error;
use instruction_sheet::config::CropConfig;
use instruction_sheet::crop::{crop, crop_region, output_size};

const RED: [u8; 3] = [220, 30, 30];
const BLUE: [u8; 3] = [30, 30, 220];

fn near(px: Rgb<u8>, want: [u8; 3]) -> bool {
    px.0.iter()
        .zip(want)
        .all(|(&a, b)| (a as i16 - b as i16).abs() <= 40)
}

#[test]
fn region_trims_wide_source_symmetrically() {
    let r = crop_region(400, 100, 1.0);
    assert_eq!((r.width, r.height), (100.0, 100.0));
    assert_eq!(r.x, 150.0);
    assert_eq!(r.x, 400.0 - (r.x + r.width));
    assert_eq!(r.y, 0.0);
}

#[test]
fn region_trims_tall_source_symmetrically() {
    let r = crop_region(400, 300, 16.0 / 9.0);
    assert_eq!(r.width, 400.0);
    assert!((r.height - 225.0).abs() < 1e-9);
    assert!((r.y - 37.5).abs() < 1e-9);
    assert!((r.y - (300.0 - (r.y + r.height))).abs() < 1e-9);
}

#[test]
fn region_keeps_matching_source_whole() {
    let r = crop_region(1600, 900, 16.0 / 9.0);
    assert!(r.x.abs() < 1e-9 && r.y.abs() < 1e-9);
    assert!((r.width - 1600.0).abs() < 1e-6);
    assert!((r.height - 900.0).abs() < 1e-6);
}

#[test]
fn output_size_scales_cell_by_oversample() {
    assert_eq!(output_size(80.0, 45.0, 10.0), (800, 450));
    assert_eq!(output_size(0.04, 10.0, 10.0), (1, 100));
}

#[tokio::test]
async fn crop_fills_target_box_exactly() {
    let _ = env_logger::try_init();
    let source = solid_png(640, 480, RED);
    let out = crop(&source, 80.0, 45.0, &CropConfig::default())
        .await
        .expect("crop");
    assert_eq!((out.pixel_width, out.pixel_height), (800, 450));

    let decoded = image::load_from_memory(&out.data).expect("output is a decodable jpeg");
    assert_eq!(decoded.dimensions(), (800, 450));
    let rgb = decoded.to_rgb8();
    assert!(near(*rgb.get_pixel(400, 225), RED));
}

#[tokio::test]
async fn wide_source_keeps_its_horizontal_center() {
    // Red | blue | red, the blue band exactly the square center.
    let source = banded_png(300, 100, 100, RED, BLUE);
    let config = CropConfig {
        oversample: 10.0,
        ..CropConfig::default()
    };
    let out = crop(&source, 10.0, 10.0, &config).await.unwrap();
    let rgb = image::load_from_memory(&out.data).unwrap().to_rgb8();
    assert_eq!(rgb.dimensions(), (100, 100));
    for (x, y) in [(50, 50), (4, 50), (95, 50), (50, 4), (50, 95)] {
        assert!(near(*rgb.get_pixel(x, y), BLUE), "pixel ({x},{y}) is {:?}", rgb.get_pixel(x, y));
    }
}

#[tokio::test]
async fn tall_source_keeps_its_vertical_center() {
    let source = stacked_png(100, 300, 100, RED, BLUE);
    let out = crop(&source, 10.0, 10.0, &CropConfig::default()).await.unwrap();
    let rgb = image::load_from_memory(&out.data).unwrap().to_rgb8();
    for (x, y) in [(50, 50), (50, 4), (50, 95)] {
        assert!(near(*rgb.get_pixel(x, y), BLUE), "pixel ({x},{y}) is {:?}", rgb.get_pixel(x, y));
    }
}

#[tokio::test]
async fn jpeg_sources_are_accepted() {
    let source = solid_jpeg(120, 160, BLUE);
    let out = crop(&source, 60.0, 80.0, &CropConfig::default()).await.unwrap();
    assert_eq!((out.pixel_width, out.pixel_height), (600, 800));
}

#[tokio::test]
async fn undecodable_bytes_fail_with_image_decode() {
    let err = crop(&corrupt_asset(), 80.0, 60.0, &CropConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ImageDecode { .. }), "got {err:?}");
}

#[tokio::test]
async fn non_positive_target_is_a_build_error() {
    let source = solid_png(10, 10, RED);
    for (w, h) in [(0.0, 45.0), (80.0, -1.0), (f32::NAN, 10.0)] {
        let err = crop(&source, w, h, &CropConfig::default()).await.unwrap_err();
        assert!(matches!(err, Error::DocumentBuild(_)), "got {err:?}");
    }
}

#[tokio::test]
async fn repeated_crops_are_identical() {
    let source = banded_png(300, 200, 80, RED, BLUE);
    let config = CropConfig::default();
    let a = crop(&source, 80.0, 60.0, &config).await.unwrap();
    let b = crop(&source, 80.0, 60.0, &config).await.unwrap();
    assert_eq!(a.data, b.data);
}
