// End-to-end flow: a caller builds partial settings, the renderer resolves
// defaults once and then computes output geometry from the source image.

use inkout::{Color, ExportSettings, Size, SizeMode, SizeSpec};

#[test]
fn test_downscale_export() {
    let settings = ExportSettings::new()
        .with_size(SizeSpec::uniform(0.5, SizeMode::Scale))
        .apply_defaults();

    let spec = settings.desired_size.value().unwrap();
    assert!(spec.is_valid());
    assert_eq!(spec.to_size(300.0, 150.0), Size::new(150.0, 75.0));

    // Untouched fields got the universal defaults.
    assert_eq!(settings.should_crop.value(), Ok(true));
    assert_eq!(settings.background_color, Some(Color::TRANSPARENT));
}

#[test]
fn test_fixed_size_export_with_pen_context() {
    let pen = "#1a2b3c".parse::<Color>().unwrap();
    let settings = ExportSettings::new()
        .with_crop(false)
        .with_size(Size::new(800.0, 600.0))
        .apply_defaults_with(3.0, pen);

    assert_eq!(settings.should_crop.value(), Ok(false));
    assert_eq!(settings.stroke_color, Some(pen));
    assert_eq!(settings.stroke_width.value(), Ok(3.0));

    let spec = settings.desired_size.value().unwrap();
    assert_eq!(spec.mode, SizeMode::Size);
    assert_eq!(spec.to_scale(400.0, 300.0), Size::new(2.0, 2.0));
}

#[test]
fn test_empty_settings_keep_source_geometry() {
    let settings = ExportSettings::new().apply_defaults();
    let spec = settings.desired_size.value().unwrap();
    assert_eq!(spec.to_size(300.0, 150.0), Size::new(300.0, 150.0));
    assert_eq!(spec.to_scale(300.0, 150.0), Size::new(1.0, 1.0));
}
