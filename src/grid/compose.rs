//! Output canvas assembly and tile copying

use crate::grid::plan::{Dimensions, GridPlan};
use crate::io::error::{PreviewError, Result};
use image::{RgbaImage, imageops};

/// The finished preview image
///
/// Owns the composite tile buffer and, once annotation has run, a separate
/// highlight layer sitting above it. Keeping the highlight on its own layer
/// guarantees the tile pixel data is never altered by the boundary marker.
#[derive(Debug, Clone)]
pub struct PreviewCanvas {
    tiles: RgbaImage,
    highlight: Option<RgbaImage>,
}

impl PreviewCanvas {
    /// Wrap a finished composite buffer with no highlight yet
    pub const fn new(tiles: RgbaImage) -> Self {
        Self {
            tiles,
            highlight: None,
        }
    }

    /// Canvas dimensions in pixels
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.tiles.width(), self.tiles.height())
    }

    /// The composite tile buffer, untouched by annotation
    pub const fn tiles(&self) -> &RgbaImage {
        &self.tiles
    }

    /// The highlight layer, present once annotation has run
    pub const fn highlight(&self) -> Option<&RgbaImage> {
        self.highlight.as_ref()
    }

    /// Merge the highlight layer over the tiles for display or export
    pub fn flattened(&self) -> RgbaImage {
        let mut merged = self.tiles.clone();
        if let Some(highlight) = &self.highlight {
            imageops::overlay(&mut merged, highlight, 0, 0);
        }
        merged
    }

    pub(crate) fn set_highlight(&mut self, layer: RgbaImage) {
        self.highlight = Some(layer);
    }
}

/// Copy the source tile into every placement of the plan
///
/// The canvas starts fully transparent with no placeholder background.
/// Copies replace rather than blend, which is equivalent to independent
/// compositing since placements never overlap. Placements are validated
/// up front so a failing copy never yields a partially tiled canvas: any
/// invalid placement fails the whole operation.
///
/// # Errors
///
/// Returns `CompositeFailure` when a placement does not match the source
/// tile's size or extends beyond the canvas.
pub fn composite(content: &RgbaImage, plan: &GridPlan) -> Result<PreviewCanvas> {
    let total = plan.placements.len();
    let canvas_width = u64::from(plan.canvas.width);
    let canvas_height = u64::from(plan.canvas.height);

    for (placement, rect) in plan.placements.iter().enumerate() {
        if rect.width != content.width() || rect.height != content.height() {
            return Err(PreviewError::CompositeFailure {
                placement,
                total,
                reason: format!(
                    "placement is {}x{} but the source tile is {}x{}",
                    rect.width,
                    rect.height,
                    content.width(),
                    content.height()
                ),
            });
        }

        let fits_x = u64::from(rect.x) + u64::from(rect.width) <= canvas_width;
        let fits_y = u64::from(rect.y) + u64::from(rect.height) <= canvas_height;
        if !fits_x || !fits_y {
            return Err(PreviewError::CompositeFailure {
                placement,
                total,
                reason: "placement extends beyond the canvas".to_string(),
            });
        }
    }

    let mut canvas = RgbaImage::new(plan.canvas.width, plan.canvas.height);
    for rect in &plan.placements {
        imageops::replace(&mut canvas, content, i64::from(rect.x), i64::from(rect.y));
    }

    Ok(PreviewCanvas::new(canvas))
}
