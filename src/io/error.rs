//! Error types for mosaic decoding and batch catalog operations

use std::fmt;
use std::path::PathBuf;

/// Rejection of a single mosaic string
///
/// Every variant is local to one mosaic: batch runs record it and move on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MosaicError {
    /// The mosaic string has no characters
    EmptyMosaic,

    /// Tile count is not a perfect square
    NotSquare {
        /// Number of characters in the mosaic string
        length: usize,
    },

    /// A character does not name a tile
    InvalidTile {
        /// Zero-based character position in the mosaic string
        position: usize,
        /// The offending character
        character: char,
    },

    /// Every front tile is blank so there is no strand to trace
    NoStrand {
        /// Side length of the grid
        size: usize,
    },
}

impl MosaicError {
    /// Whether the string was rejected before tracing began
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyMosaic | Self::NotSquare { .. } | Self::InvalidTile { .. }
        )
    }

    /// Whether the grid parsed but is degenerate
    pub const fn is_structural_error(&self) -> bool {
        matches!(self, Self::NoStrand { .. })
    }
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMosaic => write!(f, "Mosaic string is empty"),
            Self::NotSquare { length } => {
                write!(f, "Mosaic length {length} is not a perfect square")
            }
            Self::InvalidTile {
                position,
                character,
            } => {
                write!(
                    f,
                    "Invalid tile character '{character}' at position {position} (expected 0-9 or a)"
                )
            }
            Self::NoStrand { size } => {
                write!(f, "All tiles of the {size}x{size} mosaic are blank")
            }
        }
    }
}

impl std::error::Error for MosaicError {}

/// Convenience type alias for decoding results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Failure while reading or writing batch catalog files
#[derive(Debug)]
pub enum CatalogError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A result file line could not be parsed back into a record
    MalformedRecord {
        /// Result file containing the line
        path: PathBuf,
        /// One-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Batch target is neither a mosaic file nor a directory
    InvalidTarget {
        /// The rejected target
        path: PathBuf,
    },

    /// Worker pool could not be started
    ThreadPool {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
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
            Self::MalformedRecord { path, line, reason } => {
                write!(
                    f,
                    "Malformed record at '{}' line {line}: {reason}",
                    path.display()
                )
            }
            Self::InvalidTarget { path } => {
                write!(
                    f,
                    "Target '{}' must be a mosaic file or directory",
                    path.display()
                )
            }
            Self::ThreadPool { reason } => write!(f, "Failed to start worker pool: {reason}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for catalog results
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Attach a path and operation to an I/O failure
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> CatalogError {
    let path = path.into();
    move |source| CatalogError::FileSystem {
        path,
        operation,
        source,
    }
}
