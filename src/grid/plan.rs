//! Canvas sizing and placement computation
//!
//! Pure coordinate arithmetic: given tile dimensions and a tiling
//! configuration, computes the output canvas size and one placement
//! rectangle per grid cell.

use crate::io::configuration::{DEFAULT_COLS, DEFAULT_GAP, DEFAULT_ROWS, MAX_CANVAS_DIMENSION};
use crate::io::error::{PreviewError, Result, invalid_config};

/// Pixel dimensions of a tile or canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Dimensions {
    /// Create dimensions from a width and height
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either axis is zero
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Tiling configuration: grid shape and inter-tile spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileConfig {
    /// Number of tile rows, at least 1
    pub rows: u32,
    /// Number of tile columns, at least 1
    pub cols: u32,
    /// Spacing in pixels between adjacent tiles, never at canvas edges
    pub gap: u32,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            gap: DEFAULT_GAP,
        }
    }
}

/// One grid cell's target rectangle in output-canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRect {
    /// Left edge of the cell
    pub x: u32,
    /// Top edge of the cell
    pub y: u32,
    /// Cell width, always the tile width
    pub width: u32,
    /// Cell height, always the tile height
    pub height: u32,
}

/// Output canvas dimensions plus the placement sequence
#[derive(Debug, Clone)]
pub struct GridPlan {
    /// Output canvas size
    pub canvas: Dimensions,
    /// `rows * cols` placements in row-major order, pairwise non-overlapping
    pub placements: Vec<PlacementRect>,
}

/// Compute the output canvas size and all placement rectangles
///
/// Canvas width is `cols * tile.width + gap * (cols - 1)`, analogously for
/// height; tiles pack contiguously when `gap` is zero. Placements are
/// generated row-major, each exactly the tile's size.
///
/// # Errors
///
/// Returns `InvalidConfig` when `rows` or `cols` is zero or the canvas
/// would exceed `MAX_CANVAS_DIMENSION` on either axis, and `EmptySource`
/// when the tile has zero area.
pub fn plan(tile: Dimensions, config: &TileConfig) -> Result<GridPlan> {
    if config.rows == 0 {
        return Err(invalid_config(
            "rows",
            &config.rows,
            &"at least one row is required",
        ));
    }

    if config.cols == 0 {
        return Err(invalid_config(
            "cols",
            &config.cols,
            &"at least one column is required",
        ));
    }

    if tile.is_empty() {
        return Err(PreviewError::EmptySource {
            reason: format!("tile dimensions are {}x{}", tile.width, tile.height),
        });
    }

    let canvas = Dimensions::new(
        axis_extent(tile.width, config.cols, config.gap, "cols")?,
        axis_extent(tile.height, config.rows, config.gap, "rows")?,
    );

    let cell_count = config.rows as usize * config.cols as usize;
    let mut placements = Vec::with_capacity(cell_count);

    let step_x = u64::from(tile.width) + u64::from(config.gap);
    let step_y = u64::from(tile.height) + u64::from(config.gap);

    for row in 0..config.rows {
        for col in 0..config.cols {
            placements.push(PlacementRect {
                x: (u64::from(col) * step_x) as u32,
                y: (u64::from(row) * step_y) as u32,
                width: tile.width,
                height: tile.height,
            });
        }
    }

    Ok(GridPlan { canvas, placements })
}

// Canvas extent along one axis: count tiles plus count-1 gaps, checked
// against the memory safety limit
fn axis_extent(tile_extent: u32, count: u32, gap: u32, parameter: &'static str) -> Result<u32> {
    let extent = u128::from(count) * u128::from(tile_extent)
        + u128::from(gap) * (u128::from(count) - 1);

    if extent > u128::from(MAX_CANVAS_DIMENSION) {
        return Err(invalid_config(
            parameter,
            &count,
            &format!("the output canvas would exceed {MAX_CANVAS_DIMENSION} pixels on one axis"),
        ));
    }

    Ok(extent as u32)
}
