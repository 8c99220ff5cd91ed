use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::color::Rgb;
use crate::errors::IdenticonError;
use crate::grid::Grid;
use crate::options::image_side;

pub const BACKGROUND: Rgb = Rgb::WHITE;

pub fn rasterize(
    grid: &Grid,
    color: Rgb,
    cell_size: u32,
) -> Result<RgbaImage, IdenticonError> {
    let side = image_side(grid.size(), cell_size)?;
    let mut image = RgbaImage::from_pixel(side, side, BACKGROUND.to_rgba());
    let foreground = color.to_rgba();
    for row in 0..grid.size() {
        for column in 0..grid.size() {
            if grid.is_on(row, column) != Some(true) {
                continue;
            };
            let offset_x = column as u32 * cell_size;
            let offset_y = row as u32 * cell_size;
            for x in offset_x..offset_x + cell_size {
                for y in offset_y..offset_y + cell_size {
                    image.put_pixel(x, y, foreground);
                };
            };
        };
    };
    Ok(image)
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, IdenticonError> {
    let mut buffer = Cursor::new(vec![]);
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}
