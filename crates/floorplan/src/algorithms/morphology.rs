//! Binary erosion and dilation with square kernels.
//!
//! The neighborhood of a pixel is the `k × k` window around it clipped to the
//! image, so border pixels see a smaller window. A square window of radius
//! `r` is the L∞ ball of radius `r`, so both operators run on imageproc's
//! distance-transform morphology.

use imageproc::{distance_transform::Norm, morphology};
use strum::Display;
use tracing::debug;

use crate::{
    error::Result,
    traits::MaskOperation,
    types::{BinaryMask, Kernel},
};

/// Elementary morphological operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum MorphOp {
    /// Max filter: foreground if any neighbor is foreground
    Dilate,
    /// Min filter: foreground only if every neighbor is foreground
    Erode,
}

/// Radius handed to imageproc. Past the larger image side the window already
/// covers every pixel, so clamping there leaves the result unchanged.
fn clamped_radius(mask: &BinaryMask, kernel: Kernel) -> u8 {
    let longest = mask.width().max(mask.height());
    kernel.radius().min(longest).min(u8::MAX as u32) as u8
}

/// Apply `op` once with the given kernel
pub fn apply(mask: &BinaryMask, kernel: Kernel, op: MorphOp) -> BinaryMask {
    let radius = clamped_radius(mask, kernel);
    if mask.width() == 0 || mask.height() == 0 || radius == 0 {
        return mask.clone();
    }

    let gray = mask.to_gray(255, 0);
    let out = match op {
        MorphOp::Dilate => morphology::dilate(&gray, Norm::LInf, radius),
        MorphOp::Erode => morphology::erode(&gray, Norm::LInf, radius),
    };
    BinaryMask::from_gray(&out, |v| v > 0)
}

/// Apply `op` `iterations` times in sequence; not equivalent to one pass with
/// a larger kernel near the border.
pub fn apply_iterated(mask: &BinaryMask, kernel: Kernel, op: MorphOp, iterations: u32) -> BinaryMask {
    let mut current = mask.clone();
    for _ in 0..iterations {
        current = apply(&current, kernel, op);
    }
    current
}

pub fn dilate(mask: &BinaryMask, kernel: Kernel) -> BinaryMask {
    apply(mask, kernel, MorphOp::Dilate)
}

pub fn erode(mask: &BinaryMask, kernel: Kernel) -> BinaryMask {
    apply(mask, kernel, MorphOp::Erode)
}

/// Erosion followed by dilation; removes strokes thinner than the kernel
pub fn open(mask: &BinaryMask, kernel: Kernel) -> BinaryMask {
    dilate(&erode(mask, kernel), kernel)
}

/// Dilation followed by erosion; bridges gaps narrower than the kernel
pub fn close(mask: &BinaryMask, kernel: Kernel) -> BinaryMask {
    erode(&dilate(mask, kernel), kernel)
}

/// Repeated erosion or dilation stage
#[derive(Debug, Clone)]
pub struct Morphology {
    pub op: MorphOp,
    pub kernel: Kernel,
    pub iterations: u32,
}

impl MaskOperation for Morphology {
    fn apply(&self, mask: &BinaryMask) -> Result<BinaryMask> {
        let out = apply_iterated(mask, self.kernel, self.op, self.iterations);
        debug!(
            op = %self.op,
            kernel = self.kernel.size(),
            iterations = self.iterations,
            foreground = out.count_foreground(),
            "morphology"
        );
        Ok(out)
    }

    fn describe(&self) -> String {
        format!("{} {}x{} x{}", self.op, self.kernel.size(), self.kernel.size(), self.iterations)
    }
}

/// Opening stage (erode then dilate)
#[derive(Debug, Clone)]
pub struct Opening {
    pub kernel: Kernel,
}

impl MaskOperation for Opening {
    fn apply(&self, mask: &BinaryMask) -> Result<BinaryMask> {
        let out = open(mask, self.kernel);
        debug!(kernel = self.kernel.size(), foreground = out.count_foreground(), "opening");
        Ok(out)
    }

    fn describe(&self) -> String {
        format!("open {}x{}", self.kernel.size(), self.kernel.size())
    }
}

/// Closing stage (dilate then erode), repeated as a pair
#[derive(Debug, Clone)]
pub struct Closing {
    pub kernel: Kernel,
    pub iterations: u32,
}

impl MaskOperation for Closing {
    fn apply(&self, mask: &BinaryMask) -> Result<BinaryMask> {
        let mut out = mask.clone();
        for _ in 0..self.iterations {
            out = close(&out, self.kernel);
        }
        debug!(
            kernel = self.kernel.size(),
            iterations = self.iterations,
            foreground = out.count_foreground(),
            "closing"
        );
        Ok(out)
    }

    fn describe(&self) -> String {
        format!("close {}x{} x{}", self.kernel.size(), self.kernel.size(), self.iterations)
    }
}
