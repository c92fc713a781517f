use tracing::debug;

use super::flood_fill::fill_4_connected;
use crate::{
    error::Result,
    traits::MaskOperation,
    types::{BinaryMask, ComponentStats, LabelGrid},
};

/// Label the 4-connected foreground components of `mask`.
///
/// Ids are dense and assigned in row-major order of each component's first
/// pixel. The labeler only measures; use [`retain_components`] to filter.
pub fn label_components(mask: &BinaryMask) -> (LabelGrid, Vec<ComponentStats>) {
    let (width, height) = mask.dimensions();
    let mut labels = LabelGrid::new(width, height);
    let mut stats = Vec::new();
    let foreground = mask.as_slice();

    for y in 0..height {
        for x in 0..width {
            let idx = mask.index(x, y);
            if !foreground[idx] || labels.as_slice()[idx].is_some() {
                continue;
            }

            let label = stats.len() as u32;
            let slots = labels.as_mut_slice();
            let (mut min_x, mut max_x, mut min_y, mut max_y) = (x, x, y, y);
            let mut area = 0u64;

            fill_4_connected(
                width,
                height,
                [(x, y)],
                |i| {
                    if !foreground[i] || slots[i].is_some() {
                        return false;
                    }
                    slots[i] = Some(label);
                    true
                },
                |px, py| {
                    area += 1;
                    min_x = min_x.min(px);
                    max_x = max_x.max(px);
                    min_y = min_y.min(py);
                    max_y = max_y.max(py);
                },
            );

            stats.push(ComponentStats {
                label,
                min_x,
                min_y,
                width: max_x - min_x + 1,
                height: max_y - min_y + 1,
                area,
            });
        }
    }

    (labels, stats)
}

/// Mask of the pixels whose component has `area >= min_area`
pub fn retain_components(
    labels: &LabelGrid,
    stats: &[ComponentStats],
    min_area: u64,
) -> BinaryMask {
    let keep: Vec<bool> = stats.iter().map(|s| s.area >= min_area).collect();
    let data = labels
        .as_slice()
        .iter()
        .map(|label| label.is_some_and(|l| keep[l as usize]))
        .collect();
    BinaryMask::from_raw(labels.width(), labels.height(), data)
}

/// Drop every component smaller than `min_area` pixels
pub fn remove_small_components(mask: &BinaryMask, min_area: u64) -> BinaryMask {
    let (labels, stats) = label_components(mask);
    let kept = stats.iter().filter(|s| s.area >= min_area).count();
    debug!(
        components = stats.len(),
        kept,
        dropped = stats.len() - kept,
        min_area,
        "component filter"
    );
    retain_components(&labels, &stats, min_area)
}

/// Stage removing components below an area threshold
#[derive(Debug, Clone)]
pub struct RemoveSmallComponents {
    pub min_area: u64,
}

impl MaskOperation for RemoveSmallComponents {
    fn apply(&self, mask: &BinaryMask) -> Result<BinaryMask> {
        Ok(remove_small_components(mask, self.min_area))
    }

    fn describe(&self) -> String {
        format!("drop components < {} px", self.min_area)
    }
}
