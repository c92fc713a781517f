//! Floor filling: textures every sufficiently large pocket enclosed by walls.

use image::{GrayImage, RgbImage};
use tracing::{debug, info};

use crate::{
    compose::composite_floor_plan,
    config::FloorFillerConfig,
    error::Result,
    pipeline::MaskPipeline,
    types::{BinaryMask, ThresholdMode},
};

/// Result of a floor fill run
#[derive(Debug, Clone)]
pub struct FloorFill {
    /// Pixels darker than the wall threshold
    pub walls: BinaryMask,
    /// Enclosed floor after area filtering and smoothing
    pub floor: BinaryMask,
    /// Composite: white outside, black walls, textured floor
    pub image: RgbImage,
}

/// Wall binarization followed by the stages that turn walls into kept floor
pub fn floor_pipeline(config: &FloorFillerConfig) -> MaskPipeline {
    MaskPipeline::builder()
        .threshold(ThresholdMode::Fixed(config.wall_threshold))
        .enclosed_regions()
        .remove_small_components(config.min_floor_area_px)
        .close(config.smooth_kernel(), config.smooth_iterations)
        .build()
}

/// Fill the enclosed floor of a walls-only image with `texture`
pub fn fill_floor(
    image: &GrayImage,
    texture: &RgbImage,
    config: &FloorFillerConfig,
) -> Result<FloorFill> {
    let pipeline = floor_pipeline(config);
    debug!("{}", pipeline.info());

    let (_, walls) = pipeline.binarize(image)?;
    let floor = pipeline.apply(&walls)?;
    info!(floor_pixels = floor.count_foreground(), "filled floor");

    let image = composite_floor_plan(&walls, &floor, texture)?;
    Ok(FloorFill {
        walls,
        floor,
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{BLACK, WHITE};
    use image::{Luma, Rgb};
    use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

    fn texture() -> RgbImage {
        RgbImage::from_fn(4, 3, |x, y| Rgb([100 + x as u8, 150 + y as u8, 42]))
    }

    /// Closed 2px rectangle outline from (5, 5) to (44, 44) on white
    fn walls_only() -> GrayImage {
        let mut img = GrayImage::from_pixel(50, 50, Luma([255]));
        draw_filled_rect_mut(&mut img, Rect::at(5, 5).of_size(40, 40), Luma([0]));
        draw_filled_rect_mut(&mut img, Rect::at(7, 7).of_size(36, 36), Luma([255]));
        img
    }

    #[test]
    fn test_fills_enclosed_room() {
        let source = walls_only();
        let tex = texture();
        let result = fill_floor(&source, &tex, &FloorFillerConfig::default()).unwrap();

        for (x, y, pixel) in result.image.enumerate_pixels() {
            let wall = source.get_pixel(x, y).0[0] == 0;
            let interior = (7..43).contains(&x) && (7..43).contains(&y);
            if wall {
                assert_eq!(pixel, &BLACK, "wall at ({x}, {y})");
            } else if interior {
                assert_eq!(pixel, tex.get_pixel(x % 4, y % 3), "floor at ({x}, {y})");
            } else {
                assert_eq!(pixel, &WHITE, "outside at ({x}, {y})");
            }
        }
        assert_eq!(result.floor.count_foreground(), 36 * 36);
    }

    #[test]
    fn test_small_rooms_are_dropped() {
        let mut source = GrayImage::from_pixel(30, 30, Luma([255]));
        draw_filled_rect_mut(&mut source, Rect::at(5, 5).of_size(8, 8), Luma([0]));
        draw_filled_rect_mut(&mut source, Rect::at(7, 7).of_size(4, 4), Luma([255]));

        let result = fill_floor(&source, &texture(), &FloorFillerConfig::default()).unwrap();
        assert!(result.floor.is_empty());
        assert_eq!(result.image.get_pixel(8, 8), &WHITE);
        assert_eq!(result.image.get_pixel(5, 5), &BLACK);
    }

    #[test]
    fn test_open_room_is_outside() {
        let mut source = walls_only();
        draw_filled_rect_mut(&mut source, Rect::at(20, 5).of_size(4, 2), Luma([255]));

        let result = fill_floor(&source, &texture(), &FloorFillerConfig::default()).unwrap();
        assert!(result.floor.is_empty());
        assert_eq!(result.image.get_pixel(25, 25), &WHITE);
    }

    #[test]
    fn test_without_smoothing_keeps_exact_pocket() {
        let config = FloorFillerConfig {
            smooth_iterations: 0,
            ..Default::default()
        };
        let result = fill_floor(&walls_only(), &texture(), &config).unwrap();
        assert_eq!(result.floor.count_foreground(), 36 * 36);
        assert_eq!(floor_pipeline(&config).len(), 3);
    }
}
