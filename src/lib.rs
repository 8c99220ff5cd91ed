//! Deterministic identicon generator.
//!
//! The input is hashed, the first three bytes of the digest select
//! the color and the following bytes populate a horizontally mirrored grid.
mod color;
mod digest;
mod errors;
mod grid;
mod options;
mod raster;

use image::RgbaImage;
use sha2::{Digest, Sha512};

pub use color::{
    extract_color,
    extract_hsv,
    hsv_to_rgb,
    ColorSource,
    Hsv,
    Rgb,
};
pub use digest::hex_digest;
pub use errors::IdenticonError;
pub use grid::{required_digest_length, Grid};
pub use options::{IdenticonOptions, MAX_IMAGE_SIDE, MAX_SIZE};
pub use raster::{encode_png, rasterize, BACKGROUND};

/// Creates identicon from the given input string
pub fn generate(
    input: &str,
    options: &IdenticonOptions,
) -> Result<RgbaImage, IdenticonError> {
    generate_with_digest::<Sha512>(input, options)
}

/// Creates identicon using a different hash function.
/// Fails if the digest is too short for the requested grid size.
pub fn generate_with_digest<D: Digest>(
    input: &str,
    options: &IdenticonOptions,
) -> Result<RgbaImage, IdenticonError> {
    let dimensions = options.validate()?;
    let digest = hex_digest::<D>(input);
    let color = ColorSource::from_option(options.color).resolve(&digest)?;
    let grid = Grid::build(&digest, dimensions.size)?;
    let image = rasterize(&grid, color, dimensions.cell_size)?;
    log::debug!(
        "generated {}x{} identicon ({color})",
        image.width(),
        image.height(),
    );
    Ok(image)
}

/// Creates identicon and encodes it as PNG
pub fn generate_png(
    input: &str,
    options: &IdenticonOptions,
) -> Result<Vec<u8>, IdenticonError> {
    let image = generate(input, options)?;
    encode_png(&image)
}
