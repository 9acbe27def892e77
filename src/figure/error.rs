use std::path::PathBuf;

/// Errors that can occur while rendering or showing a figure
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// I/O error (creating the output directory)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The drawing backend failed
    #[error("Drawing error: {0}")]
    Drawing(String),

    /// Figure size or resolution leaves no room to draw
    #[error("Invalid figure size: {width}x{height} px")]
    InvalidSize {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },

    /// Only PNG images can be written
    #[error("Unsupported image format: {}", .0.display())]
    UnsupportedImageFormat(PathBuf),
}
