//! Error types for charset validation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::output::char_literal;

/// Fatal errors that stop a check run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// A path argument does not name an existing regular file.
    ///
    /// Checking stops at the first such path; later paths are never looked at.
    #[error("Path {} is not a file", path.display())]
    NotAFile { path: PathBuf },

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// The kind of failure that aborted the scan of a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// The file could not be opened.
    Open,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// An I/O error occurred after the file was opened.
    Read,
}

/// A file that could not be (fully) scanned.
///
/// Unlike [`CheckError`], this is not fatal: the driver reports it on the
/// error stream and moves on to the next path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The file path whose scan was aborted.
    pub path: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Description of the underlying error.
    pub message: String,
}

impl ScanError {
    pub(crate) fn from_io(path: PathBuf, kind: ScanErrorKind, err: &std::io::Error) -> Self {
        let kind = if err.kind() == std::io::ErrorKind::InvalidData {
            ScanErrorKind::InvalidEncoding
        } else {
            kind
        };
        Self {
            path,
            kind,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not open file: {} - {}, skipping",
            self.path.display(),
            self.message
        )
    }
}

impl std::error::Error for ScanError {}

/// A single disallowed character found in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// The offending character.
    pub ch: char,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in characters)
    pub column: usize,
}

impl Violation {
    /// The character's code point as `U+XXXX`, zero-padded to at least four
    /// uppercase hex digits.
    #[must_use]
    pub fn code_point_label(&self) -> String {
        format!("U+{:04X}", u32::from(self.ch))
    }

    /// Format the violation for human-readable output.
    ///
    /// `Line {line}, Column {column}: '{char}' (U+XXXX)`, with the character
    /// quoted by [`char_literal`](crate::output::char_literal).
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!(
            "Line {}, Column {}: {} ({})",
            self.line,
            self.column,
            char_literal(self.ch),
            self.code_point_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_point_label_pads_to_four_digits() {
        let v = Violation {
            ch: '\u{0250}',
            line: 1,
            column: 1,
        };
        assert_eq!(v.code_point_label(), "U+0250");
    }

    #[test]
    fn test_code_point_label_beyond_bmp() {
        let v = Violation {
            ch: '\u{1F600}',
            line: 1,
            column: 1,
        };
        assert_eq!(v.code_point_label(), "U+1F600");
    }

    #[test]
    fn test_format_violation() {
        let v = Violation {
            ch: '\u{65E5}',
            line: 3,
            column: 7,
        };
        assert_eq!(
            v.format_human_readable(),
            "Line 3, Column 7: '\u{65E5}' (U+65E5)"
        );
    }

    #[test]
    fn test_format_violation_escapes_invisible_chars() {
        let v = Violation {
            ch: '\u{FEFF}',
            line: 1,
            column: 2,
        };
        assert_eq!(
            v.format_human_readable(),
            "Line 1, Column 2: '\\ufeff' (U+FEFF)"
        );
    }

    #[test]
    fn test_format_violation_keeps_combining_mark() {
        let v = Violation {
            ch: '\u{0301}',
            line: 1,
            column: 2,
        };
        assert_eq!(
            v.format_human_readable(),
            "Line 1, Column 2: '\u{0301}' (U+0301)"
        );
    }

    #[test]
    fn test_not_a_file_message() {
        let err = CheckError::NotAFile {
            path: PathBuf::from("docs"),
        };
        assert_eq!(err.to_string(), "Path docs is not a file");
    }

    #[test]
    fn test_scan_error_invalid_data_is_encoding() {
        let io = std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "stream did not contain valid UTF-8",
        );
        let err = ScanError::from_io(PathBuf::from("a.txt"), ScanErrorKind::Read, &io);
        assert_eq!(err.kind, ScanErrorKind::InvalidEncoding);
        assert_eq!(
            err.to_string(),
            "Could not open file: a.txt - stream did not contain valid UTF-8, skipping"
        );
    }
}
