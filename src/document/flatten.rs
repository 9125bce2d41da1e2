//! Pure rasterization of documents, layers, and selections
//!
//! Every function here derives a new pixel buffer from borrowed document
//! state. Nothing mutates the document, so group flattening never alters
//! caller-owned layers.

use crate::document::model::{Document, Layer, LayerKind};
use image::{RgbaImage, imageops};

/// Flatten the whole document into a single buffer of its canvas size
///
/// Layers are alpha-composited bottom to top onto a transparent canvas.
/// Content outside the document canvas is clipped.
pub fn flatten_document(document: &Document) -> RgbaImage {
    let mut canvas = RgbaImage::new(document.width(), document.height());
    for layer in document.layers() {
        draw_layer(&mut canvas, layer, 0, 0);
    }
    canvas
}

/// Rasterize one layer or group into a buffer of exactly its bounds
///
/// For a group this is the pure replacement for duplicate-merge-discard:
/// children are composited into a fresh buffer and the original layers are
/// left untouched. Returns `None` for a layer with no content.
pub fn rasterize_layer(layer: &Layer) -> Option<RgbaImage> {
    let bounds = layer.bounds()?;
    let mut canvas = RgbaImage::new(bounds.width, bounds.height);
    // shift the bounds origin back to the buffer origin
    draw_layer(&mut canvas, layer, -bounds.x, -bounds.y);
    Some(canvas)
}

/// Extract a rectangular region from an image buffer
///
/// The rectangle must lie within the image; callers clamp beforehand.
pub fn crop_region(image: &RgbaImage, x: u32, y: u32, width: u32, height: u32) -> RgbaImage {
    imageops::crop_imm(image, x, y, width, height).to_image()
}

// Recursively composite a layer onto the canvas at its offset plus (dx, dy)
fn draw_layer(canvas: &mut RgbaImage, layer: &Layer, dx: i64, dy: i64) {
    let (x, y) = layer.offset();
    match layer.kind() {
        LayerKind::Pixel(content) => imageops::overlay(canvas, content, x + dx, y + dy),
        LayerKind::Group(children) => {
            for child in children {
                draw_layer(canvas, child, x + dx, y + dy);
            }
        }
    }
}
