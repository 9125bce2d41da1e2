//! Document, layer, and selection data model
//!
//! An in-memory stand-in for the host application's document context: canvas
//! dimensions, a stack of layers (flat raster layers or groups of child
//! layers), an active-layer marker, and an optional rectangular selection.

use image::RgbaImage;

/// Rectangular bounds of a layer in document coordinates
///
/// Layers may extend beyond the document canvas, so edges are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerBounds {
    /// Left edge in document space
    pub x: i64,
    /// Top edge in document space
    pub y: i64,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl LayerBounds {
    const fn right(&self) -> i64 {
        self.x + self.width as i64
    }

    const fn bottom(&self) -> i64 {
        self.y + self.height as i64
    }

    fn union(self, other: Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self {
            x,
            y,
            width: (right - x) as u32,
            height: (bottom - y) as u32,
        }
    }

    const fn translated(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }
}

/// Pixel content of a layer
#[derive(Debug, Clone)]
pub enum LayerKind {
    /// Raster layer with its own pixel buffer
    Pixel(RgbaImage),
    /// Group of child layers, positioned relative to the group origin
    Group(Vec<Layer>),
}

/// A single raster layer or layer group
#[derive(Debug, Clone)]
pub struct Layer {
    name: String,
    x: i64,
    y: i64,
    kind: LayerKind,
}

impl Layer {
    /// Create a raster layer at the given document offset
    pub fn pixel(name: impl Into<String>, x: i64, y: i64, content: RgbaImage) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            kind: LayerKind::Pixel(content),
        }
    }

    /// Create a layer group from child layers
    ///
    /// Children are positioned in the same coordinate space as the group
    /// itself; the group carries no offset of its own.
    pub fn group(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            x: 0,
            y: 0,
            kind: LayerKind::Group(children),
        }
    }

    /// Layer name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The layer's content variant
    pub const fn kind(&self) -> &LayerKind {
        &self.kind
    }

    /// Offset of this layer in its parent's coordinate space
    pub const fn offset(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Whether this layer is a group
    pub const fn is_group(&self) -> bool {
        matches!(self.kind, LayerKind::Group(_))
    }

    /// Bounding rectangle of the layer's content, `None` when empty
    ///
    /// A group's bounds are the union of its children's bounds; a group with
    /// no non-empty children has no bounds.
    pub fn bounds(&self) -> Option<LayerBounds> {
        match &self.kind {
            LayerKind::Pixel(content) => (content.width() > 0 && content.height() > 0).then(
                || LayerBounds {
                    x: self.x,
                    y: self.y,
                    width: content.width(),
                    height: content.height(),
                },
            ),
            LayerKind::Group(children) => children
                .iter()
                .filter_map(Self::bounds)
                .reduce(LayerBounds::union)
                .map(|bounds| bounds.translated(self.x, self.y)),
        }
    }
}

/// Active rectangular selection in document coordinates
///
/// Only rectangular selections are representable; non-rectangular selections
/// are out of scope for preview generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Selection width in pixels
    pub width: u32,
    /// Selection height in pixels
    pub height: u32,
}

impl Selection {
    /// Create a selection rectangle
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Host document: canvas dimensions, layer stack, and optional selection
#[derive(Debug, Clone)]
pub struct Document {
    width: u32,
    height: u32,
    layers: Vec<Layer>,
    active_layer: usize,
    selection: Option<Selection>,
}

impl Document {
    /// Create an empty document with the given canvas dimensions
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            layers: Vec::new(),
            active_layer: 0,
            selection: None,
        }
    }

    /// Create a single-layer document from an image buffer
    ///
    /// The document canvas takes the image's dimensions and the image
    /// becomes the background layer.
    pub fn from_image(content: RgbaImage) -> Self {
        let (width, height) = content.dimensions();
        let mut document = Self::new(width, height);
        document.push_layer(Layer::pixel("Background", 0, 0, content));
        document
    }

    /// Append a layer and make it the active layer
    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
        self.active_layer = self.layers.len() - 1;
    }

    /// Change the active layer; out-of-range indices are ignored
    pub fn set_active_layer(&mut self, index: usize) {
        if index < self.layers.len() {
            self.active_layer = index;
        }
    }

    /// Set the active selection
    pub const fn select(&mut self, selection: Selection) {
        self.selection = Some(selection);
    }

    /// Clear the active selection
    pub const fn deselect(&mut self) {
        self.selection = None;
    }

    /// Document canvas width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Document canvas height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// All top-level layers, bottom to top
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of top-level layers
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// The active layer, `None` for a document with no layers
    pub fn active_layer(&self) -> Option<&Layer> {
        self.layers.get(self.active_layer)
    }

    /// The active selection, if any
    pub const fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Whether any top-level layer is a group
    pub fn has_group(&self) -> bool {
        self.layers.iter().any(Layer::is_group)
    }

    /// Whether any layer carries non-empty pixel content
    pub fn has_artwork(&self) -> bool {
        self.layers.iter().any(|layer| layer.bounds().is_some())
    }
}
