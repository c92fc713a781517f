//! Tunable parameters for the two pipelines.
//!
//! Defaults are the tuning used for typical scanned blueprints; every field can
//! be overridden per call (the CLI reads overrides from a TOML or JSON file).

use serde::{Deserialize, Serialize};

use crate::types::Kernel;

/// Kernel used by the floor smoothing closings
pub const SMOOTH_KERNEL_SIZE: u32 = 3;

/// Parameters for [`extract_walls`](crate::walls::extract_walls)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallExtractorConfig {
    /// Strokes thinner than this are removed by the opening
    pub min_wall_thickness_px: u32,
    /// Components smaller than this (furniture, fixtures, text) are dropped
    pub min_component_area_px: u64,
    /// Dilations applied after the opening to reconnect broken walls
    pub dilation_iterations: u32,
    /// Erosions applied at the end to thin the reconnected walls
    pub erosion_iterations: u32,
}

impl Default for WallExtractorConfig {
    fn default() -> Self {
        Self {
            min_wall_thickness_px: 6,
            min_component_area_px: 1200,
            dilation_iterations: 2,
            erosion_iterations: 6,
        }
    }
}

impl WallExtractorConfig {
    /// Kernel for the opening and the reconnecting dilations
    pub fn opening_kernel(&self) -> Kernel {
        Kernel::square(self.min_wall_thickness_px)
    }

    /// Smaller kernel for the final thinning
    pub fn erosion_kernel(&self) -> Kernel {
        Kernel::square(self.min_wall_thickness_px / 2)
    }
}

/// Parameters for [`fill_floor`](crate::floor::fill_floor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorFillerConfig {
    /// Pixels darker than this are walls; lower is stricter
    pub wall_threshold: u8,
    /// Enclosed pockets smaller than this are not treated as floor
    pub min_floor_area_px: u64,
    /// Closings applied to the kept floor; 0 to 2 is usually enough
    pub smooth_iterations: u32,
}

impl Default for FloorFillerConfig {
    fn default() -> Self {
        Self {
            wall_threshold: 40,
            min_floor_area_px: 500,
            smooth_iterations: 1,
        }
    }
}

impl FloorFillerConfig {
    pub fn smooth_kernel(&self) -> Kernel {
        Kernel::square(SMOOTH_KERNEL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_kernels_keep_asymmetry() {
        let config = WallExtractorConfig::default();
        assert_eq!(config.opening_kernel().size(), 7);
        assert_eq!(config.erosion_kernel().size(), 3);

        let thin = WallExtractorConfig {
            min_wall_thickness_px: 3,
            ..Default::default()
        };
        assert_eq!(thin.opening_kernel().size(), 3);
        assert_eq!(thin.erosion_kernel().size(), 1);
    }
}
