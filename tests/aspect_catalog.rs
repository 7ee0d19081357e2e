mod common;

use common::assert_close;
use instruction_sheet::Error;
use instruction_sheet::aspect::{
    ASPECT_PRESETS, AspectPreset, DEFAULT_PRESET, dimensions_for, dimensions_or_default,
};

#[test]
fn every_preset_matches_its_ratio_with_larger_side_at_max() {
    for preset in ASPECT_PRESETS {
        let dims = dimensions_for(preset.label(), 80.0).expect("known label");
        let (w, h) = preset.proportions();
        assert_close(dims.ratio(), w as f32 / h as f32, 1e-4);
        assert_close(dims.width.max(dims.height), 80.0, 1e-4);
    }
}

#[test]
fn documented_dimensions() {
    let cases = [
        ("1:1", 80.0, 80.0),
        ("3:4", 60.0, 80.0),
        ("4:3", 80.0, 60.0),
        ("9:16", 45.0, 80.0),
        ("16:9", 80.0, 45.0),
        ("21:9", 80.0, 80.0 * 9.0 / 21.0),
    ];
    for (label, w, h) in cases {
        let dims = dimensions_for(label, 80.0).unwrap();
        assert_close(dims.width, w, 1e-4);
        assert_close(dims.height, h, 1e-4);
    }
}

#[test]
fn lookup_is_idempotent() {
    for preset in ASPECT_PRESETS {
        assert_eq!(
            dimensions_for(preset.label(), 50.0).unwrap(),
            dimensions_for(preset.label(), 50.0).unwrap()
        );
        assert_eq!(AspectPreset::from_label(preset.label()).unwrap(), preset);
        assert_eq!(preset.to_string().parse::<AspectPreset>().unwrap(), preset);
    }
}

#[test]
fn unknown_label_is_an_error_at_the_catalog() {
    let err = dimensions_for("5:4", 80.0).unwrap_err();
    assert!(matches!(err, Error::UnknownAspectRatio { ref label } if label == "5:4"));
}

#[test]
fn unknown_label_falls_back_to_four_by_three() {
    let _ = env_logger::try_init();
    assert_eq!(DEFAULT_PRESET, AspectPreset::Landscape4x3);
    for label in ["5:4", "", "square", "16x9"] {
        let dims = dimensions_or_default(label, 80.0);
        assert_close(dims.width, 80.0, 1e-4);
        assert_close(dims.height, 60.0, 1e-4);
    }
}

#[test]
fn labels_are_trimmed() {
    assert_eq!(
        AspectPreset::from_label(" 16:9 ").unwrap(),
        AspectPreset::Landscape16x9
    );
}
