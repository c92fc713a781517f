use image::GrayImage;
use crate::{error::Result, types::BinaryMask};

/// Trait for choosing the cut that splits a grayscale image into a mask
pub trait Binarizer: Send + Sync {
    /// Intensity cut for this image; pixels strictly below it are foreground
    fn threshold(&self, image: &GrayImage) -> Result<u8>;
}

/// Trait for a single mask-to-mask processing stage
pub trait MaskOperation: Send + Sync {
    /// Apply the stage, returning a mask of the same dimensions
    fn apply(&self, mask: &BinaryMask) -> Result<BinaryMask>;

    /// Short human-readable description used in logs
    fn describe(&self) -> String;
}
