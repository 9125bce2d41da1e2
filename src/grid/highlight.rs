//! Reference-tile boundary highlighting

use crate::grid::compose::PreviewCanvas;
use crate::grid::plan::Dimensions;
use crate::io::configuration::HIGHLIGHT_COLOR;
use crate::io::error::{PreviewError, Result};
use image::{Rgba, RgbaImage};

/// Outline the reference tile on a separate top-most layer
///
/// Draws a 1-pixel stroke around the boundary of the first (top-left) tile,
/// stroked on the inside edge so it never extends beyond the tile. The mark
/// is visual metadata only: it lives on its own layer and leaves the tile
/// pixel data untouched.
///
/// # Errors
///
/// Returns `Annotation` when the tile has zero area or extends beyond the
/// canvas. The composite remains usable in that case; it merely lacks its
/// boundary marker.
pub fn annotate(canvas: &mut PreviewCanvas, tile: Dimensions) -> Result<()> {
    if tile.is_empty() {
        return Err(PreviewError::Annotation {
            reason: "the reference tile has no area".to_string(),
        });
    }

    let dims = canvas.dimensions();
    if tile.width > dims.width || tile.height > dims.height {
        return Err(PreviewError::Annotation {
            reason: format!(
                "the reference tile ({}x{}) extends beyond the canvas ({}x{})",
                tile.width, tile.height, dims.width, dims.height
            ),
        });
    }

    let mut layer = RgbaImage::new(dims.width, dims.height);
    let stroke = Rgba(HIGHLIGHT_COLOR);

    for x in 0..tile.width {
        layer.put_pixel(x, 0, stroke);
        layer.put_pixel(x, tile.height - 1, stroke);
    }
    for y in 0..tile.height {
        layer.put_pixel(0, y, stroke);
        layer.put_pixel(tile.width - 1, y, stroke);
    }

    canvas.set_highlight(layer);
    Ok(())
}
