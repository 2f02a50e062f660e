//! # Writer Errors
//!
//! Error types for mesh serialization.

use thiserror::Error;

/// Errors that can occur while writing a mesh file.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Underlying I/O failure, surfaced unchanged
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The output path has no recognized mesh extension
    #[error("Unsupported output format: .{extension}")]
    UnsupportedFormat { extension: String },

    /// A cell block the writers cannot represent
    #[error("Unsupported cell type: {name}")]
    UnsupportedCellType { name: String },

    /// A cell references a point that does not exist
    #[error("Cell index {index} out of range for {vertex_count} points")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}
