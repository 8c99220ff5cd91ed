use serde::Deserialize;

use crate::color::Rgb;
use crate::errors::IdenticonError;

/// Largest supported grid size.
/// A SHA-512 digest provides 128 hex characters, a 10x10 grid uses 126.
pub const MAX_SIZE: i32 = 10;

/// Largest supported image side in pixels (400 MB RGBA buffer)
pub const MAX_IMAGE_SIDE: u32 = 10_000;

const fn default_size() -> i32 { 10 }

const fn default_cell_size() -> i32 { 20 }

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct IdenticonOptions {
    /// Grid dimension, a larger grid gives more distinct identicons
    #[serde(default = "default_size")]
    pub size: i32,

    /// Side of a single cell in pixels
    #[serde(default = "default_cell_size")]
    pub cell_size: i32,

    /// Overrides the color derived from the input
    #[serde(default)]
    pub color: Option<Rgb>,
}

impl Default for IdenticonOptions {
    fn default() -> Self {
        Self {
            size: default_size(),
            cell_size: default_cell_size(),
            color: None,
        }
    }
}

impl IdenticonOptions {
    pub fn with_size(self, size: i32) -> Self {
        Self { size, ..self }
    }

    pub fn with_cell_size(self, cell_size: i32) -> Self {
        Self { cell_size, ..self }
    }

    pub fn with_color(self, color: Rgb) -> Self {
        Self { color: Some(color), ..self }
    }

    pub(crate) fn validate(&self) -> Result<Dimensions, IdenticonError> {
        if self.size <= 0 || self.size > MAX_SIZE {
            return Err(IdenticonError::ConfigurationError("max size out of range"));
        };
        if self.cell_size <= 0 {
            return Err(IdenticonError::ConfigurationError("cell size must be positive"));
        };
        // Both values are positive at this point
        let size = self.size.unsigned_abs();
        let cell_size = self.cell_size.unsigned_abs();
        image_side(size as usize, cell_size)?;
        let dimensions = Dimensions {
            size: size as usize,
            cell_size: cell_size,
        };
        Ok(dimensions)
    }
}

/// Returns the side of the image in pixels
/// if the RGBA buffer for it can be allocated
pub(crate) fn image_side(
    size: usize,
    cell_size: u32,
) -> Result<u32, IdenticonError> {
    let side = u32::try_from(size).ok()
        .and_then(|size| size.checked_mul(cell_size))
        .filter(|side| *side <= MAX_IMAGE_SIDE)
        .ok_or(IdenticonError::ConfigurationError("image is too large"))?;
    usize::try_from(side).ok()
        .and_then(|side| side.checked_mul(side))
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or(IdenticonError::ConfigurationError("image is too large"))?;
    Ok(side)
}

/// Validated grid and cell dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Dimensions {
    pub size: usize,
    pub cell_size: u32,
}
