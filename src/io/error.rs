//! Error types for preview session operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all preview operations
#[derive(Debug)]
pub enum PreviewError {
    /// No document is open in the host environment
    NoDocument,

    /// The resolved source region has zero width or zero height
    ///
    /// Raised whichever source mode is active: an artwork-free document,
    /// an empty layer or group, or an empty selection.
    EmptySource {
        /// Description of the empty region
        reason: String,
    },

    /// Tiling configuration validation failed
    InvalidConfig {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A tile copy failed during compositing
    ///
    /// The whole composite is discarded; a partially tiled canvas is never
    /// returned to the caller.
    CompositeFailure {
        /// Zero-based index of the failing placement
        placement: usize,
        /// Total number of placements in the plan
        total: usize,
        /// Description of the failure
        reason: String,
    },

    /// The reference-tile highlight could not be drawn
    ///
    /// The composite itself succeeded; the preview merely lacks its
    /// boundary marker.
    Annotation {
        /// Description of the failure
        reason: String,
    },

    /// The user declined a confirmation prompt
    ///
    /// A clean, expected exit with no side effects rather than a failure.
    Cancelled,

    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the preview image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => {
                write!(f, "There is no open document to preview")
            }
            Self::EmptySource { reason } => {
                write!(f, "Empty source: {reason}")
            }
            Self::InvalidConfig {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CompositeFailure {
                placement,
                total,
                reason,
            } => {
                write!(
                    f,
                    "Failed to place tile {} of {total}: {reason}",
                    placement + 1
                )
            }
            Self::Annotation { reason } => {
                write!(f, "Failed to highlight the reference tile: {reason}")
            }
            Self::Cancelled => {
                write!(f, "Cancelled by user")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PreviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PreviewError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for preview results
pub type Result<T> = std::result::Result<T, PreviewError>;

impl PreviewError {
    /// Whether this error is a clean user cancellation rather than a failure
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Create an invalid configuration error
pub fn invalid_config(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PreviewError {
    PreviewError::InvalidConfig {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
