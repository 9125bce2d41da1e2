//! Source-mode selection and tile pixel extraction
//!
//! Decides which of the three source regions feeds a tiling session and
//! extracts that region's pixels. Priority is fixed: an active selection
//! wins over the layer stack, and the layer stack wins over the whole image
//! only when the document has more than one layer or contains a group.

use crate::document::flatten::{crop_region, flatten_document, rasterize_layer};
use crate::document::model::{Document, Selection};
use crate::grid::plan::Dimensions;
use crate::io::error::{PreviewError, Result};
use std::fmt;

const GROUP_CONFIRM_MESSAGE: &str = "This will preview tiling of the selected layer group.\n\
     Are you sure you want to continue?";
const GROUP_CONFIRM_TITLE: &str = "Tile Layer Group?";

/// Which source region is active for a session
///
/// Chosen once at session start and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// The whole flattened document
    Image,
    /// The active layer, or a flattened copy of the active group
    Layer,
    /// The active rectangular selection
    Selection,
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => f.write_str("image"),
            Self::Layer => f.write_str("layer"),
            Self::Selection => f.write_str("selection"),
        }
    }
}

/// Pixel content extracted from the active source region
#[derive(Debug, Clone)]
pub struct ResolvedSource {
    /// Mode selected by the priority rules
    pub mode: SourceMode,
    /// Extracted pixel content, exactly `dimensions` in size
    pub content: image::RgbaImage,
    /// Tile dimensions, both axes non-zero
    pub dimensions: Dimensions,
}

/// Caller-supplied yes/no confirmation prompt
///
/// Flattening a layer group can be slow and feels destructive, so the
/// resolver asks before proceeding. Returning `false` cancels the session
/// cleanly.
pub trait Confirm {
    /// Present a yes/no prompt; `true` continues the session
    fn confirm(&mut self, message: &str, title: &str) -> bool;
}

/// Accepts every confirmation prompt without interaction
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl Confirm for AcceptAll {
    fn confirm(&mut self, _message: &str, _title: &str) -> bool {
        true
    }
}

/// Declines every confirmation prompt without interaction
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclineAll;

impl Confirm for DeclineAll {
    fn confirm(&mut self, _message: &str, _title: &str) -> bool {
        false
    }
}

/// Decide the active source mode and extract its pixel content
///
/// # Errors
///
/// Returns `EmptySource` when the chosen region has zero width or height,
/// and `Cancelled` when the caller declines the layer-group confirmation.
pub fn resolve(document: &Document, confirm: &mut dyn Confirm) -> Result<ResolvedSource> {
    if let Some(selection) = document.selection() {
        return resolve_selection(document, selection);
    }

    if document.layer_count() > 1 || document.has_group() {
        return resolve_layer(document, confirm);
    }

    resolve_image(document)
}

fn resolve_selection(document: &Document, selection: Selection) -> Result<ResolvedSource> {
    if selection.width == 0 || selection.height == 0 {
        return Err(PreviewError::EmptySource {
            reason: "The selection is empty".to_string(),
        });
    }

    if selection.x >= document.width() || selection.y >= document.height() {
        return Err(PreviewError::EmptySource {
            reason: "The selection lies outside the document".to_string(),
        });
    }

    // bounding-box semantics, clamped to the document canvas
    let width = selection.width.min(document.width() - selection.x);
    let height = selection.height.min(document.height() - selection.y);

    let flattened = flatten_document(document);
    let content = crop_region(&flattened, selection.x, selection.y, width, height);

    Ok(ResolvedSource {
        mode: SourceMode::Selection,
        content,
        dimensions: Dimensions::new(width, height),
    })
}

fn resolve_layer(document: &Document, confirm: &mut dyn Confirm) -> Result<ResolvedSource> {
    let layer = document
        .active_layer()
        .ok_or_else(|| PreviewError::EmptySource {
            reason: "The document has no active layer".to_string(),
        })?;

    let Some(bounds) = layer.bounds() else {
        return Err(PreviewError::EmptySource {
            reason: "The current layer is empty".to_string(),
        });
    };

    if layer.is_group() && !confirm.confirm(GROUP_CONFIRM_MESSAGE, GROUP_CONFIRM_TITLE) {
        return Err(PreviewError::Cancelled);
    }

    let content = rasterize_layer(layer).ok_or_else(|| PreviewError::EmptySource {
        reason: "The current layer is empty".to_string(),
    })?;

    Ok(ResolvedSource {
        mode: SourceMode::Layer,
        content,
        dimensions: Dimensions::new(bounds.width, bounds.height),
    })
}

fn resolve_image(document: &Document) -> Result<ResolvedSource> {
    let dimensions = Dimensions::new(document.width(), document.height());

    if dimensions.is_empty() || !document.has_artwork() {
        return Err(PreviewError::EmptySource {
            reason: "The image contains no artwork".to_string(),
        });
    }

    Ok(ResolvedSource {
        mode: SourceMode::Image,
        content: flatten_document(document),
        dimensions,
    })
}
