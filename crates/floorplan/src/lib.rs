//! # Blueprint Wall and Floor Masks
//!
//! Turns a raster floor plan into two derived images:
//!
//! - a **walls-only** image, with thin strokes, text and furniture removed;
//! - a **filled floor** image, where pockets enclosed by walls carry a tiled
//!   texture, walls are black and everything reachable from the page edge is
//!   white.
//!
//! ## Core Features
//!
//! - **Binarization**: fixed threshold or Otsu's method
//! - **Morphology**: square-kernel erosion, dilation, opening and closing
//! - **Region Labeling**: 4-connected components with bounding boxes and areas
//! - **Boundary Flood Fill**: separates the outside from enclosed pockets
//! - **Pipeline System**: compose mask stages behind the [`MaskOperation`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use floorplan::{extract_walls, WallExtractorConfig};
//!
//! let image = image::open("blueprint.png")?.to_luma8();
//! let result = extract_walls(&image, &WallExtractorConfig::default())?;
//! result.image.save("walls_only.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Custom Pipeline
//!
//! ```rust,no_run
//! use floorplan::{MaskPipeline, Kernel, ThresholdMode};
//!
//! let pipeline = MaskPipeline::builder()
//!     .threshold(ThresholdMode::Otsu)
//!     .open(Kernel::square(5))
//!     .remove_small_components(800)
//!     .build();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core modules
pub mod error;
pub mod types;
pub mod config;
pub mod traits;
pub mod algorithms;
pub mod pipeline;
pub mod compose;
pub mod walls;
pub mod floor;
pub mod io;

// Re-exports for convenience
pub use error::{FloorplanError, Result};
pub use types::{BinaryMask, ComponentStats, Kernel, LabelGrid, ThresholdMode};
pub use config::{FloorFillerConfig, WallExtractorConfig};
pub use traits::*;
pub use algorithms::*;
pub use pipeline::{MaskPipeline, builder::MaskPipelineBuilder};
pub use compose::{composite_floor_plan, tile_texture};
pub use walls::{WallExtraction, extract_walls};
pub use floor::{FloorFill, fill_floor};
pub use io::*;

/// Conventional location of the floor texture, relative to the program root
pub const DEFAULT_TEXTURE_PATH: &str = "components/textures/wooden_floor.jpg";
