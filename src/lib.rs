//! Tiled texture preview generation from an in-memory document model
//!
//! Takes a source image, a layer, or a rectangular selection and produces a
//! composite that repeats it as a rows-by-columns grid of tiles, with a
//! magenta outline around the reference tile so the repeat boundary is easy
//! to see.

#![forbid(unsafe_code)]

/// Host-document model and source-region resolution
pub mod document;
/// Coordinate math, canvas compositing, and highlight annotation
pub mod grid;
/// Input/output operations and error handling
pub mod io;
/// Session orchestration and host-environment handling
pub mod session;

pub use io::error::{PreviewError, Result};
