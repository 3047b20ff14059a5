//! # Inkout
//!
//! Value types describing how a rasterized ink drawing (e.g. a hand-drawn
//! signature) is cropped, sized or scaled, and colored when exported to a
//! bitmap. The rasterization pipeline itself lives in the consuming
//! renderer; this crate only carries its configuration.

pub mod color;
pub mod error;
pub mod geom;
pub mod optional;
pub mod settings;

pub use color::Color;
pub use error::{Error, Result};
pub use geom::{Size, SizeMode, SizeSpec};
pub use optional::OptionalValue;
pub use settings::ExportSettings;
