//! Texture tiling and final floor-plan compositing

use image::{Rgb, RgbImage};

use crate::{
    error::{FloorplanError, Result},
    types::BinaryMask,
};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Repeat `texture` row-major over a `width × height` canvas, cropping the
/// last tiles
pub fn tile_texture(texture: &RgbImage, width: u32, height: u32) -> Result<RgbImage> {
    let (tw, th) = texture.dimensions();
    if tw == 0 || th == 0 {
        return Err(FloorplanError::EmptyTexture);
    }
    Ok(RgbImage::from_fn(width, height, |x, y| {
        *texture.get_pixel(x % tw, y % th)
    }))
}

/// White canvas, walls in black, floor pixels from the tiled texture.
///
/// Floor is painted last, so a pixel set in both masks shows texture.
pub fn composite_floor_plan(
    walls: &BinaryMask,
    floor: &BinaryMask,
    texture: &RgbImage,
) -> Result<RgbImage> {
    if walls.dimensions() != floor.dimensions() {
        return Err(FloorplanError::DimensionMismatch {
            expected: walls.dimensions(),
            actual: floor.dimensions(),
        });
    }
    let (width, height) = walls.dimensions();
    let tiled = tile_texture(texture, width, height)?;

    let mut out = RgbImage::from_pixel(width, height, WHITE);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        if floor.get(x, y) {
            *pixel = *tiled.get_pixel(x, y);
        } else if walls.get(x, y) {
            *pixel = BLACK;
        }
    }
    Ok(out)
}
