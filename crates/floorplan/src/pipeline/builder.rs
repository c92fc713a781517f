use crate::{
    algorithms::{
        Closing, EnclosedRegions, FixedThresholdBinarizer, MorphOp, Morphology, Opening,
        OtsuBinarizer, RemoveSmallComponents,
    },
    pipeline::MaskPipeline,
    traits::{Binarizer, MaskOperation},
    types::{Kernel, ThresholdMode},
};

/// Builder for creating mask pipelines with a fluent API
pub struct MaskPipelineBuilder {
    binarizer: Option<Box<dyn Binarizer>>,
    operations: Vec<Box<dyn MaskOperation>>,
}

impl MaskPipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            binarizer: None,
            operations: Vec::new(),
        }
    }

    /// Set the binarizer (replaces any existing one)
    pub fn binarizer<B>(mut self, binarizer: B) -> Self
    where
        B: Binarizer + 'static,
    {
        self.binarizer = Some(Box::new(binarizer));
        self
    }

    /// Set the binarizer from a threshold mode
    pub fn threshold(self, mode: ThresholdMode) -> Self {
        match mode {
            ThresholdMode::Fixed(threshold) => self.binarizer(FixedThresholdBinarizer { threshold }),
            ThresholdMode::Otsu => self.binarizer(OtsuBinarizer),
        }
    }

    /// Add a stage to the pipeline
    pub fn add_operation<O>(mut self, operation: O) -> Self
    where
        O: MaskOperation + 'static,
    {
        self.operations.push(Box::new(operation));
        self
    }

    pub fn erode(self, kernel: Kernel, iterations: u32) -> Self {
        self.add_operation(Morphology {
            op: MorphOp::Erode,
            kernel,
            iterations,
        })
    }

    pub fn dilate(self, kernel: Kernel, iterations: u32) -> Self {
        self.add_operation(Morphology {
            op: MorphOp::Dilate,
            kernel,
            iterations,
        })
    }

    pub fn open(self, kernel: Kernel) -> Self {
        self.add_operation(Opening { kernel })
    }

    pub fn close(self, kernel: Kernel, iterations: u32) -> Self {
        self.add_operation(Closing { kernel, iterations })
    }

    /// Keep only components with at least `min_area` pixels
    pub fn remove_small_components(self, min_area: u64) -> Self {
        self.add_operation(RemoveSmallComponents { min_area })
    }

    /// Replace the wall mask with the pockets it encloses
    pub fn enclosed_regions(self) -> Self {
        self.add_operation(EnclosedRegions)
    }

    pub fn build(self) -> MaskPipeline {
        MaskPipeline::new(self.binarizer, self.operations)
    }
}

impl Default for MaskPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
