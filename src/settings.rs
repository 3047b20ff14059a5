//! Export configuration and default resolution.

use crate::color::Color;
use crate::geom::SizeSpec;
use crate::optional::OptionalValue;

/// Stroke width used when neither the settings nor the renderer supply one.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// How an ink drawing is cropped, sized and colored when exported.
///
/// Built with a subset of fields populated, then resolved exactly once by
/// the renderer via [`apply_defaults`] before use. Resolution returns a
/// fully-populated copy; instances are plain `Copy` values and are not
/// meant to be mutated after being handed to the renderer.
///
/// [`apply_defaults`]: ExportSettings::apply_defaults
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ExportSettings {
    pub should_crop: OptionalValue<bool>,
    pub desired_size: OptionalValue<SizeSpec>,
    pub stroke_color: Option<Color>,
    pub background_color: Option<Color>,
    pub stroke_width: OptionalValue<f64>,
}

impl ExportSettings {
    /// Settings with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_crop(mut self, crop: bool) -> Self {
        self.should_crop = crop.into();
        self
    }

    pub fn with_size(mut self, size: impl Into<SizeSpec>) -> Self {
        self.desired_size = size.into().into();
        self
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width.into();
        self
    }

    /// Resolves unset fields against the built-in defaults: crop, identity
    /// scale, black stroke of width [`DEFAULT_STROKE_WIDTH`], transparent
    /// background.
    pub fn apply_defaults(self) -> Self {
        self.apply_defaults_with(DEFAULT_STROKE_WIDTH, Color::BLACK)
    }

    /// Resolves unset fields, taking the renderer's context-specific stroke
    /// width and color as the fallback for those two fields.
    ///
    /// Gap-filling only: fields already set are never overwritten, so a
    /// second pass is a no-op. Never fails.
    pub fn apply_defaults_with(self, stroke_width: f64, stroke_color: Color) -> Self {
        tracing::trace!(stroke_width, %stroke_color, "resolving export settings");
        Self {
            should_crop: self.should_crop.value_or(true).into(),
            desired_size: self.desired_size.value_or(SizeSpec::from(1.0)).into(),
            stroke_color: Some(self.stroke_color.unwrap_or(stroke_color)),
            background_color: Some(self.background_color.unwrap_or(Color::TRANSPARENT)),
            stroke_width: self.stroke_width.value_or(stroke_width).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::SizeMode;

    #[test]
    fn test_universal_defaults() {
        let settings = ExportSettings::new().apply_defaults();
        assert_eq!(settings.should_crop.value(), Ok(true));
        assert_eq!(
            settings.desired_size.value().unwrap(),
            SizeSpec::uniform(1.0, SizeMode::Scale)
        );
        assert_eq!(settings.background_color, Some(Color::TRANSPARENT));
        assert_eq!(settings.stroke_color, Some(Color::BLACK));
        assert_eq!(settings.stroke_width.value(), Ok(DEFAULT_STROKE_WIDTH));
    }

    #[test]
    fn test_defaulting_fills_gaps_only() {
        let settings = ExportSettings::new().with_crop(false).apply_defaults();
        assert_eq!(settings.should_crop.value(), Ok(false));
    }

    #[test]
    fn test_renderer_fallbacks() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let settings = ExportSettings::new().apply_defaults_with(2.5, red);
        assert_eq!(settings.stroke_width.value(), Ok(2.5));
        assert_eq!(settings.stroke_color, Some(red));
    }

    #[test]
    fn test_explicit_stroke_beats_renderer_fallback() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let settings = ExportSettings::new()
            .with_stroke_width(4.0)
            .with_stroke_color(Color::BLACK)
            .apply_defaults_with(2.5, red);
        assert_eq!(settings.stroke_width.value(), Ok(4.0));
        assert_eq!(settings.stroke_color, Some(Color::BLACK));
    }

    #[test]
    fn test_second_pass_is_noop() {
        let once = ExportSettings::new()
            .with_size(SizeSpec::uniform(0.5, SizeMode::Scale))
            .apply_defaults();
        assert_eq!(once.apply_defaults(), once);
    }
}
