//! Session defaults and safety limits

// Default values for the tiling configuration
/// Default number of tile rows
pub const DEFAULT_ROWS: u32 = 5;
/// Default number of tile columns
pub const DEFAULT_COLS: u32 = 5;
/// Default inter-tile gap in pixels (0 means no gap)
pub const DEFAULT_GAP: u32 = 0;

// Fully opaque magenta, visible against most artwork
/// Reference-tile outline color as RGBA
pub const HIGHLIGHT_COLOR: [u8; 4] = [0xFF, 0x00, 0xFF, 0xFF];

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output canvas dimension on either axis
pub const MAX_CANVAS_DIMENSION: u32 = 65_536;

// Output settings
/// Suffix added to preview output filenames
pub const OUTPUT_SUFFIX: &str = "_tiled";
