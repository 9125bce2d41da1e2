//! Coordinate math, compositing, and highlight annotation
//!
//! The tiling core: planning placement rectangles, copying the source tile
//! into each one, and outlining the reference tile.

/// Output canvas assembly and tile copying
pub mod compose;
/// Reference-tile boundary highlighting
pub mod highlight;
/// Canvas sizing and placement computation
pub mod plan;

pub use compose::{PreviewCanvas, composite};
pub use highlight::annotate;
pub use plan::{Dimensions, GridPlan, PlacementRect, TileConfig, plan};
