pub mod binarize;
pub mod morphology;
pub mod flood_fill;
pub mod labeling;

pub use binarize::{
    FixedThresholdBinarizer, OtsuBinarizer, binarize, histogram, otsu_threshold, resolve_threshold,
    threshold_below,
};
pub use morphology::{
    Closing, MorphOp, Morphology, Opening, apply_iterated, close, dilate, erode, open,
};
pub use flood_fill::{EnclosedRegions, enclosed_regions, reachable_from_border};
pub use labeling::{
    RemoveSmallComponents, label_components, remove_small_components, retain_components,
};
