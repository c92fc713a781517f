use image::GrayImage;
use tracing::debug;

use crate::{
    error::Result,
    traits::Binarizer,
    types::{BinaryMask, ThresholdMode},
};

/// 256-bin intensity histogram
pub fn histogram(image: &GrayImage) -> [u64; 256] {
    let mut hist = [0u64; 256];
    for pixel in image.pixels() {
        hist[pixel.0[0] as usize] += 1;
    }
    hist
}

/// Otsu's threshold: the split maximizing between-class variance.
///
/// Candidate `t` puts intensities `0..=t` in the dark class. Ties keep the
/// lowest `t`, and an image with a single intensity yields 0.
pub fn otsu_threshold(image: &GrayImage) -> u8 {
    let hist = histogram(image);
    let total = hist.iter().sum::<u64>() as f64;
    let sum_total: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &count)| i as f64 * count as f64)
        .sum();

    let mut sum_b = 0.0;
    let mut w_b = 0.0;
    let mut max_var = -1.0;
    let mut threshold = 0u8;

    for (t, &count) in hist.iter().enumerate() {
        w_b += count as f64;
        if w_b == 0.0 {
            continue;
        }
        let w_f = total - w_b;
        if w_f == 0.0 {
            break;
        }
        sum_b += t as f64 * count as f64;

        let mean_b = sum_b / w_b;
        let mean_f = (sum_total - sum_b) / w_f;
        let var_between = w_b * w_f * (mean_b - mean_f).powi(2);

        if var_between > max_var {
            max_var = var_between;
            threshold = t as u8;
        }
    }

    threshold
}

/// Foreground iff the pixel is strictly darker than `threshold`
pub fn threshold_below(image: &GrayImage, threshold: u8) -> BinaryMask {
    BinaryMask::from_gray(image, |v| v < threshold)
}

/// The cut `mode` picks for `image`
pub fn resolve_threshold(image: &GrayImage, mode: ThresholdMode) -> u8 {
    let threshold = match mode {
        ThresholdMode::Fixed(t) => t,
        ThresholdMode::Otsu => otsu_threshold(image),
    };
    debug!(%mode, threshold, "threshold");
    threshold
}

/// Binarize with either a fixed or an Otsu threshold
pub fn binarize(image: &GrayImage, mode: ThresholdMode) -> BinaryMask {
    threshold_below(image, resolve_threshold(image, mode))
}

/// Fixed-threshold binarizer
#[derive(Debug, Clone)]
pub struct FixedThresholdBinarizer {
    pub threshold: u8,
}

impl Default for FixedThresholdBinarizer {
    fn default() -> Self {
        Self { threshold: 128 }
    }
}

impl Binarizer for FixedThresholdBinarizer {
    fn threshold(&self, image: &GrayImage) -> Result<u8> {
        Ok(resolve_threshold(image, ThresholdMode::Fixed(self.threshold)))
    }
}

/// Otsu binarizer
#[derive(Debug, Clone, Default)]
pub struct OtsuBinarizer;

impl Binarizer for OtsuBinarizer {
    fn threshold(&self, image: &GrayImage) -> Result<u8> {
        Ok(resolve_threshold(image, ThresholdMode::Otsu))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn image_from_values(values: &[u8]) -> GrayImage {
        GrayImage::from_fn(values.len() as u32, 1, |x, _| Luma([values[x as usize]]))
    }

    #[test]
    fn test_otsu_bimodal_splits_between_clusters() {
        let mut values = Vec::new();
        for v in 10..=30u8 {
            values.extend(std::iter::repeat(v).take(5));
        }
        for v in 200..=230u8 {
            values.extend(std::iter::repeat(v).take(5));
        }
        let image = image_from_values(&values);

        let t = otsu_threshold(&image);
        assert!(t >= 30 && t < 200, "threshold {} outside the gap", t);

        let mask = binarize(&image, ThresholdMode::Otsu);
        let dark_below = values.iter().filter(|&&v| v < t).count();
        assert_eq!(mask.count_foreground(), dark_below);
        assert!(values.iter().zip(mask.as_slice()).all(|(&v, &fg)| !fg || v < 200));
    }

    #[test]
    fn test_otsu_constant_image() {
        for value in [0u8, 77, 255] {
            let image = GrayImage::from_pixel(8, 8, Luma([value]));
            assert_eq!(otsu_threshold(&image), 0);
            assert!(binarize(&image, ThresholdMode::Otsu).is_empty());
        }
    }

    #[test]
    fn test_otsu_two_levels_picks_dark_level() {
        // The dark level itself is the threshold, so `<` leaves it out
        let image = image_from_values(&[0, 0, 255, 255, 255]);
        assert_eq!(otsu_threshold(&image), 0);
        assert!(binarize(&image, ThresholdMode::Otsu).is_empty());
    }

    #[test]
    fn test_fixed_threshold_is_strict() {
        let image = image_from_values(&[0, 39, 40, 41, 255]);
        let mask = binarize(&image, ThresholdMode::Fixed(40));
        assert_eq!(mask.as_slice(), &[true, true, false, false, false]);
        assert_eq!(FixedThresholdBinarizer { threshold: 40 }.threshold(&image).unwrap(), 40);
    }

    #[test]
    fn test_histogram_counts() {
        let image = image_from_values(&[3, 3, 9]);
        let hist = histogram(&image);
        assert_eq!(hist[3], 2);
        assert_eq!(hist[9], 1);
        assert_eq!(hist.iter().sum::<u64>(), 3);
    }
}
