//! Error types for map description parsing and loading.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors arising from reading or parsing a map description.
///
/// Line numbers are 1-based.
#[derive(Debug)]
pub enum MapError {
    /// The map file could not be read.
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The description ended before a required line.
    MissingLine {
        /// Line number that was expected.
        line: usize,
        /// What the line should have held.
        expected: &'static str,
    },
    /// A token is not an integer.
    InvalidNumber {
        /// Line holding the token.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A header line holds the wrong number of values.
    FieldCount {
        /// Line number.
        line: usize,
        /// Number of values expected.
        expected: usize,
        /// Number of values found.
        found: usize,
    },
    /// The obstacle count is negative.
    NegativeCount {
        /// Line number of the count.
        line: usize,
        /// The value found.
        value: i64,
    },
}

impl MapError {
    /// Whether this error means the map file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "cannot read map file '{}'", path.display()),
            Self::MissingLine { line, expected } => {
                write!(f, "line {line}: missing {expected}")
            }
            Self::InvalidNumber { line, token } => {
                write!(f, "line {line}: '{token}' is not an integer")
            }
            Self::FieldCount {
                line,
                expected,
                found,
            } => write!(f, "line {line}: expected {expected} values, found {found}"),
            Self::NegativeCount { line, value } => {
                write!(f, "line {line}: obstacle count {value} is negative")
            }
        }
    }
}

impl Error for MapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_detected() {
        let err = MapError::Io {
            path: "missing.txt".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.is_not_found());
        assert!(err.source().is_some());

        let other = MapError::MissingLine {
            line: 2,
            expected: "obstacle count",
        };
        assert!(!other.is_not_found());
        assert_eq!(other.to_string(), "line 2: missing obstacle count");
    }
}
