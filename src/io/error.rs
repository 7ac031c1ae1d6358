//! Error types for configuration, rule loading and export
//!
//! Generation itself never fails: contradictions are recovered inside the
//! solver. Everything here is raised while setting a generator up or while
//! writing its output.

use crate::spatial::tiles::{Direction, TileType};
use std::fmt;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum GenerationError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The constraint map is not symmetric under direction inversion
    AsymmetricRules {
        /// Tile whose slot holds the one-way entry
        tile: TileType,
        /// Slot direction
        direction: Direction,
        /// Neighbour that does not allow `tile` back
        neighbour: TileType,
    },

    /// No tile appears in any rule, so fresh cells would have nothing to choose from
    EmptyPalette,

    /// A rule file line could not be parsed
    RuleParse {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Export requested for a level that has no resolved tiles
    EmptyLevel,

    /// Failed to save an exported image to disk
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

    /// A global logger was already installed
    Logger {
        /// Underlying logger error message
        reason: String,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::AsymmetricRules {
                tile,
                direction,
                neighbour,
            } => {
                write!(
                    f,
                    "Asymmetric rules: {tile} allows {neighbour} {direction}, but {neighbour} does not allow {tile} {}",
                    direction.invert()
                )
            }
            Self::EmptyPalette => f.write_str("Rule set does not mention any tile type"),
            Self::RuleParse { line, reason } => {
                write!(f, "Rule file line {line}: {reason}")
            }
            Self::EmptyLevel => f.write_str("Level contains no resolved tiles"),
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
            Self::Logger { reason } => write!(f, "Failed to install logger: {reason}"),
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<image::ImageError> for GenerationError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<log::SetLoggerError> for GenerationError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::Logger {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a rule file parse error
pub fn rule_parse_error(line: usize, reason: &impl ToString) -> GenerationError {
    GenerationError::RuleParse {
        line,
        reason: reason.to_string(),
    }
}
