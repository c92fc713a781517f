//! Walls-only extraction: keeps thick, large dark structures and drops thin
//! strokes, text and furniture.

use image::GrayImage;
use tracing::{debug, info};

use crate::{
    config::WallExtractorConfig,
    error::Result,
    pipeline::MaskPipeline,
    types::{BinaryMask, ThresholdMode},
};

/// Result of a wall extraction run
#[derive(Debug, Clone)]
pub struct WallExtraction {
    /// Otsu threshold the input was binarized with
    pub threshold: u8,
    /// Final wall mask
    pub walls: BinaryMask,
    /// Walls in black on white
    pub image: GrayImage,
}

/// Otsu binarization followed by the mask stages that keep only walls
pub fn wall_pipeline(config: &WallExtractorConfig) -> MaskPipeline {
    let opening = config.opening_kernel();
    MaskPipeline::builder()
        .threshold(ThresholdMode::Otsu)
        .open(opening)
        .dilate(opening, config.dilation_iterations)
        .remove_small_components(config.min_component_area_px)
        .erode(config.erosion_kernel(), config.erosion_iterations)
        .build()
}

/// Extract the structural walls from a grayscale blueprint
pub fn extract_walls(image: &GrayImage, config: &WallExtractorConfig) -> Result<WallExtraction> {
    let pipeline = wall_pipeline(config);
    debug!("{}", pipeline.info());

    let (threshold, candidates) = pipeline.binarize(image)?;
    let walls = pipeline.apply(&candidates)?;
    info!(
        threshold,
        wall_pixels = walls.count_foreground(),
        "extracted walls"
    );

    Ok(WallExtraction {
        threshold,
        image: walls.to_gray(0, 255),
        walls,
    })
}
