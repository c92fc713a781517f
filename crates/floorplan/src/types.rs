use image::{GrayImage, Luma};
use serde::{Deserialize, Serialize};

use crate::error::{FloorplanError, Result};

/// A foreground/background grid with the dimensions of the image it came from.
///
/// Pixels are stored row-major as `bool`, so a mask can only ever hold the two
/// values 0 and 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl BinaryMask {
    /// Create an all-background mask
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, false)
    }

    /// Create a mask with every pixel set to `value`
    pub fn filled(width: u32, height: u32, value: bool) -> Self {
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Build a mask by evaluating `f(x, y)` for every pixel
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self { width, height, data }
    }

    /// Mark every grayscale pixel for which `predicate` holds as foreground
    pub fn from_gray<F>(image: &GrayImage, predicate: F) -> Self
    where
        F: Fn(u8) -> bool,
    {
        Self {
            width: image.width(),
            height: image.height(),
            data: image.pixels().map(|p| predicate(p.0[0])).collect(),
        }
    }

    pub(crate) fn from_raw(width: u32, height: u32, data: Vec<bool>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major pixel values
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    #[inline]
    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Number of foreground pixels
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// True when no pixel is foreground
    pub fn is_empty(&self) -> bool {
        !self.data.iter().any(|&v| v)
    }

    /// Pixel-wise complement
    pub fn invert(&self) -> BinaryMask {
        Self::from_raw(self.width, self.height, self.data.iter().map(|&v| !v).collect())
    }

    /// Pixel-wise intersection
    pub fn and(&self, other: &BinaryMask) -> Result<BinaryMask> {
        self.zip_with(other, |a, b| a && b)
    }

    /// Pixels set here and clear in `other`
    pub fn and_not(&self, other: &BinaryMask) -> Result<BinaryMask> {
        self.zip_with(other, |a, b| a && !b)
    }

    fn zip_with<F>(&self, other: &BinaryMask, f: F) -> Result<BinaryMask>
    where
        F: Fn(bool, bool) -> bool,
    {
        if self.dimensions() != other.dimensions() {
            return Err(FloorplanError::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self::from_raw(self.width, self.height, data))
    }

    /// Render as a single-channel image
    pub fn to_gray(&self, foreground: u8, background: u8) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            Luma([if self.get(x, y) { foreground } else { background }])
        })
    }
}

/// Per-pixel component ids produced by the region labeler.
///
/// Background pixels hold `None`; foreground pixels hold a dense id starting
/// at 0, assigned in row-major discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    width: u32,
    height: u32,
    labels: Vec<Option<u32>>,
}

impl LabelGrid {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            labels: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        self.labels[y as usize * self.width as usize + x as usize]
    }

    pub fn as_slice(&self) -> &[Option<u32>] {
        &self.labels
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Option<u32>] {
        &mut self.labels
    }
}

/// Summary of one connected component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentStats {
    pub label: u32,
    pub min_x: u32,
    pub min_y: u32,
    pub width: u32,
    pub height: u32,
    /// Number of pixels carrying this label
    pub area: u64,
}

impl ComponentStats {
    /// Area of the bounding box, always at least `area`
    pub fn bounding_area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Square structuring element with an odd side length of at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Kernel {
    size: u32,
}

impl Kernel {
    /// Square kernel of side `size`, coerced to the next odd value
    pub fn square(size: u32) -> Self {
        Self { size: size | 1 }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Half-width of the neighborhood around the center pixel
    pub fn radius(&self) -> u32 {
        self.size / 2
    }
}

/// How a grayscale image is split into foreground and background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(tag = "type", content = "threshold", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ThresholdMode {
    /// Foreground iff intensity is below the given value
    Fixed(u8),
    /// Threshold chosen by maximizing between-class variance
    Otsu,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_coerces_to_odd() {
        assert_eq!(Kernel::square(0).size(), 1);
        assert_eq!(Kernel::square(1).size(), 1);
        assert_eq!(Kernel::square(6).size(), 7);
        assert_eq!(Kernel::square(7).size(), 7);
        assert_eq!(Kernel::square(3).radius(), 1);
    }

    #[test]
    fn test_mask_set_operations() {
        let a = BinaryMask::from_fn(4, 1, |x, _| x < 2);
        let b = BinaryMask::from_fn(4, 1, |x, _| x % 2 == 0);

        let and = a.and(&b).unwrap();
        assert_eq!(and.as_slice(), &[true, false, false, false]);

        let and_not = a.and_not(&b).unwrap();
        assert_eq!(and_not.as_slice(), &[false, true, false, false]);

        assert_eq!(a.invert().as_slice(), &[false, false, true, true]);
    }

    #[test]
    fn test_mask_dimension_mismatch() {
        let a = BinaryMask::new(4, 4);
        let b = BinaryMask::new(4, 5);
        assert!(matches!(
            a.and(&b),
            Err(FloorplanError::DimensionMismatch { expected: (4, 4), actual: (4, 5) })
        ));
    }

    #[test]
    fn test_gray_conversion() {
        let gray = GrayImage::from_fn(3, 1, |x, _| Luma([(x * 100) as u8]));
        let mask = BinaryMask::from_gray(&gray, |v| v < 150);
        assert_eq!(mask.as_slice(), &[true, true, false]);

        let rendered = mask.to_gray(0, 255);
        assert_eq!(rendered.get_pixel(0, 0).0[0], 0);
        assert_eq!(rendered.get_pixel(2, 0).0[0], 255);
    }
}
