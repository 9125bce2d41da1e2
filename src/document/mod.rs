//! In-memory document model and source-region resolution
//!
//! This module contains the host-document stand-in including:
//! - Document, layer, and selection data structures
//! - Pure rasterization of layers, groups, and whole documents
//! - Source-mode selection and tile pixel extraction

/// Pure rasterization of documents, layers, and selections
pub mod flatten;
/// Document, layer, and selection data model
pub mod model;
/// Source-mode selection and pixel extraction
pub mod resolve;

pub use model::{Document, Layer, LayerBounds, LayerKind, Selection};
pub use resolve::{AcceptAll, Confirm, DeclineAll, ResolvedSource, SourceMode, resolve};
