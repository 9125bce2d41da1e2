//! PNG loading and preview export at the CLI edge
//!
//! The core pipeline consumes and produces in-memory pixel buffers only;
//! file formats live here, in the binary's territory.

use crate::document::model::Document;
use crate::grid::compose::PreviewCanvas;
use crate::io::error::{PreviewError, Result};
use std::path::Path;

/// Load a PNG file as a single-layer document
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_document(path: &Path) -> Result<Document> {
    let content = image::open(path)
        .map_err(|e| PreviewError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();

    Ok(Document::from_image(content))
}

/// Save the flattened preview canvas as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview(canvas: &PreviewCanvas, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| PreviewError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .flattened()
        .save(output_path)
        .map_err(|e| PreviewError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
