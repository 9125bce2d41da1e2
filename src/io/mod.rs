//! Input/output operations and error handling
//!
//! Everything that touches the terminal or the filesystem lives here; the
//! core pipeline in `document`, `grid`, and `session` stays free of it.

/// Command-line interface and batch file processing
pub mod cli;
/// Session defaults and safety limits
pub mod configuration;
/// Error types and the crate result alias
pub mod error;
/// PNG loading and preview export
pub mod image;
/// Batch progress display
pub mod progress;
