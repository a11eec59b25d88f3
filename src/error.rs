//! Crate-level error types.

use std::fmt;

/// Errors produced by the arcview crate.
#[derive(Debug)]
pub enum ArcviewError {
    /// Malformed numeric token in an OBJ vertex or face record.
    ObjParse {
        /// 1-based line number of the offending record.
        line: usize,
        /// Human-readable description of what failed to parse.
        message: String,
    },
    /// Face record with a corner count other than 3 or 4.
    UnsupportedFace {
        /// 1-based line number of the offending record.
        line: usize,
        /// Number of corners the record carried.
        corners: usize,
    },
    /// Mesh whose coordinates all coincide; normalization would divide by
    /// zero.
    DegenerateMesh,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ArcviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjParse { line, message } => {
                write!(f, "OBJ parse error at line {line}: {message}")
            }
            Self::UnsupportedFace { line, corners } => {
                write!(
                    f,
                    "unsupported face at line {line}: {corners} corners \
                     (only 3 or 4 supported)"
                )
            }
            Self::DegenerateMesh => {
                write!(f, "degenerate mesh: all coordinates coincide")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ArcviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArcviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
