pub mod builder;

use image::GrayImage;
use tracing::debug;

use crate::{
    algorithms::binarize,
    error::Result,
    traits::{Binarizer, MaskOperation},
    types::{BinaryMask, ThresholdMode},
};

/// Cut used when a pipeline has no binarizer
pub const DEFAULT_THRESHOLD: u8 = 128;

/// A sequence of mask stages, optionally preceded by binarization
pub struct MaskPipeline {
    binarizer: Option<Box<dyn Binarizer>>,
    operations: Vec<Box<dyn MaskOperation>>,
}

impl MaskPipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::MaskPipelineBuilder {
        builder::MaskPipelineBuilder::new()
    }

    /// Create a new pipeline with the given components
    pub fn new(
        binarizer: Option<Box<dyn Binarizer>>,
        operations: Vec<Box<dyn MaskOperation>>,
    ) -> Self {
        Self {
            binarizer,
            operations,
        }
    }

    /// Split a grayscale image with the pipeline's binarizer, returning the
    /// cut it chose and the foreground mask.
    ///
    /// Without a binarizer, pixels darker than 128 are foreground.
    pub fn binarize(&self, image: &GrayImage) -> Result<(u8, BinaryMask)> {
        let threshold = match &self.binarizer {
            Some(binarizer) => binarizer.threshold(image)?,
            None => DEFAULT_THRESHOLD,
        };
        let mask = binarize(image, ThresholdMode::Fixed(threshold));
        debug!(threshold, foreground = mask.count_foreground(), "binarized");
        Ok((threshold, mask))
    }

    /// Binarize a grayscale image and run every stage on the result
    pub fn process(&self, image: &GrayImage) -> Result<BinaryMask> {
        let (_, mask) = self.binarize(image)?;
        self.apply(&mask)
    }

    /// Run every stage, in order, on an existing mask
    pub fn apply(&self, mask: &BinaryMask) -> Result<BinaryMask> {
        let mut current = mask.clone();
        for operation in &self.operations {
            current = operation.apply(&current)?;
        }
        Ok(current)
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        let stages: Vec<String> = self.operations.iter().map(|op| op.describe()).collect();
        format!(
            "Pipeline: {}, {} stages [{}]",
            if self.binarizer.is_some() { "binarizer" } else { "default threshold" },
            self.operations.len(),
            stages.join(" -> ")
        )
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
