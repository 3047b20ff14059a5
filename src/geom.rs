//! Target geometry parameters.
//!
//! [`SizeSpec`] is the core of the crate: a single value that describes the
//! desired output geometry either as absolute pixel dimensions or as a
//! multiplier of the source dimensions, and resolves either representation
//! against the actual source size.

use serde::{Deserialize, Serialize};

/// A plain width/height pair, the crate's stand-in for platform size types.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeMode {
    /// `x`/`y` are absolute pixel dimensions.
    Size,
    /// `x`/`y` multiply the source dimensions.
    Scale,
}

/// Desired output geometry, either literal pixel dimensions or a scale
/// factor of the source image.
///
/// `keep_aspect_ratio` is advisory metadata for the renderer (letterbox
/// instead of stretch); no aspect-correcting math happens here.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeSpec {
    pub x: f64,
    pub y: f64,
    pub mode: SizeMode,
    #[serde(default = "default_keep_aspect_ratio")]
    pub keep_aspect_ratio: bool,
}

fn default_keep_aspect_ratio() -> bool {
    true
}

impl SizeSpec {
    pub fn new(x: f64, y: f64, mode: SizeMode) -> Self {
        Self {
            x,
            y,
            mode,
            keep_aspect_ratio: true,
        }
    }

    /// Spec with both components set to the same scalar.
    pub fn uniform(xy: f64, mode: SizeMode) -> Self {
        Self::new(xy, xy, mode)
    }

    /// Spec taking its components from a size value. With
    /// [`SizeMode::Scale`] the dimensions are read as per-axis factors.
    pub fn from_size(size: Size, mode: SizeMode) -> Self {
        Self::new(size.width, size.height, mode)
    }

    pub fn with_aspect_ratio(mut self, keep: bool) -> Self {
        self.keep_aspect_ratio = keep;
        self
    }

    /// A spec with non-positive components is unset and must not be used
    /// for geometry computation.
    pub fn is_valid(&self) -> bool {
        self.x > 0.0 && self.y > 0.0
    }

    /// Resolves the spec to absolute output dimensions.
    ///
    /// Total over all inputs: an invalid spec yields degenerate geometry
    /// rather than an error, so callers should check [`is_valid`]
    /// beforehand.
    ///
    /// [`is_valid`]: SizeSpec::is_valid
    pub fn to_size(&self, source_width: f64, source_height: f64) -> Size {
        match self.mode {
            SizeMode::Scale => Size::new(source_width * self.x, source_height * self.y),
            SizeMode::Size => Size::new(self.x, self.y),
        }
    }

    /// Resolves the spec to per-axis scale factors.
    ///
    /// The source dimensions must be positive; with a zero dimension the
    /// division follows IEEE 754 (infinity/NaN) rather than panicking.
    pub fn to_scale(&self, source_width: f64, source_height: f64) -> Size {
        match self.mode {
            SizeMode::Scale => Size::new(self.x, self.y),
            SizeMode::Size => Size::new(self.x / source_width, self.y / source_height),
        }
    }
}

/// A bare scalar is always a uniform scale factor.
impl From<f64> for SizeSpec {
    fn from(scale: f64) -> Self {
        Self::uniform(scale, SizeMode::Scale)
    }
}

/// A size value is always an absolute size.
impl From<Size> for SizeSpec {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height, SizeMode::Size)
    }
}
