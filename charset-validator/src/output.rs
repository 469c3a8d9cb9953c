//! Plain-text output for check runs.
//!
//! Every function writes to a caller-supplied writer so the report can go to
//! stdout/stderr in the CLI and to in-memory buffers in tests.

use std::io::Write;
use std::path::Path;

use crate::error::{CheckError, ScanError, Violation};

/// Quote `ch` the way it is shown in violation reports.
///
/// Printable characters appear as-is, including combining marks. Everything
/// else is escaped: `\t`, `\n`, `\r`, `\\`, then `\xNN`, `\uNNNN` or
/// `\UNNNNNNNN` (lowercase hex) depending on the code point. The literal is
/// single-quoted unless the character is itself a single quote.
#[must_use]
pub fn char_literal(ch: char) -> String {
    let quote = if ch == '\'' { '"' } else { '\'' };
    let body = match ch {
        '\\' => "\\\\".to_owned(),
        '\t' => "\\t".to_owned(),
        '\n' => "\\n".to_owned(),
        '\r' => "\\r".to_owned(),
        c if c.is_ascii_control() => format!("\\x{:02x}", u32::from(c)),
        c if c.is_ascii() || is_printable(c) => c.to_string(),
        c => match u32::from(c) {
            cp @ ..=0xFF => format!("\\x{cp:02x}"),
            cp @ ..=0xFFFF => format!("\\u{cp:04x}"),
            cp => format!("\\U{cp:08x}"),
        },
    };
    format!("{quote}{body}{quote}")
}

/// Whether a non-ASCII character is shown unescaped.
///
/// Control, format, surrogate, private-use, unassigned and separator
/// characters are not printable.
fn is_printable(ch: char) -> bool {
    // `str::escape_debug` only escapes grapheme extenders at the start of a
    // string; behind a leading space the remaining test is printability.
    let mut sample = String::from(" ");
    sample.push(ch);
    sample.escape_debug().skip(1).eq(std::iter::once(ch))
}

/// Write one violation: a header naming the file, then the located character.
///
/// The header is repeated for every violation.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_violation(
    writer: &mut dyn Write,
    path: &Path,
    violation: &Violation,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "File {} contains characters beyond the allowed charset:",
        path.display()
    )?;
    writeln!(writer, "  {}", violation.format_human_readable())
}

/// Write the notice printed once a file reaches the report cap.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_truncation(writer: &mut dyn Write, limit: usize) -> std::io::Result<()> {
    writeln!(
        writer,
        "  (Only the first {limit} disallowed characters reported)"
    )
}

/// Write the diagnostic for a file whose scan was aborted.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_scan_error(writer: &mut dyn Write, error: &ScanError) -> std::io::Result<()> {
    writeln!(writer, "{error}")
}

/// Write a fatal check error (for example a path that is not a file).
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_check_error(writer: &mut dyn Write, error: &CheckError) -> std::io::Result<()> {
    writeln!(writer, "{error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::error::ScanErrorKind;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_violation_block() {
        let v = Violation {
            ch: '\u{2019}',
            line: 2,
            column: 5,
        };
        let out = render(|w| write_violation(w, Path::new("notes.txt"), &v));
        assert_eq!(
            out,
            "File notes.txt contains characters beyond the allowed charset:\n  Line 2, Column 5: '\u{2019}' (U+2019)\n"
        );
    }

    #[test]
    fn test_char_literal_printable() {
        assert_eq!(char_literal('\u{65E5}'), "'\u{65E5}'");
        assert_eq!(char_literal('\u{1F600}'), "'\u{1F600}'");
        // Combining marks are printable on their own.
        assert_eq!(char_literal('\u{0301}'), "'\u{0301}'");
    }

    #[test]
    fn test_char_literal_escapes_invisible() {
        assert_eq!(char_literal('\u{200D}'), "'\\u200d'");
        assert_eq!(char_literal('\u{FEFF}'), "'\\ufeff'");
        assert_eq!(char_literal('\u{2028}'), "'\\u2028'");
        assert_eq!(char_literal('\u{3000}'), "'\\u3000'");
        assert_eq!(char_literal('\u{E000}'), "'\\ue000'");
        assert_eq!(char_literal('\u{1D173}'), "'\\U0001d173'");
    }

    #[test]
    fn test_char_literal_latin_escapes() {
        assert_eq!(char_literal('\u{A0}'), "'\\xa0'");
        assert_eq!(char_literal('\u{85}'), "'\\x85'");
        assert_eq!(char_literal('\u{7F}'), "'\\x7f'");
        assert_eq!(char_literal('\u{1}'), "'\\x01'");
        assert_eq!(char_literal('\t'), "'\\t'");
        assert_eq!(char_literal('\\'), "'\\\\'");
        assert_eq!(char_literal('a'), "'a'");
        assert_eq!(char_literal(' '), "' '");
    }

    #[test]
    fn test_char_literal_quotes() {
        assert_eq!(char_literal('\''), "\"'\"");
        assert_eq!(char_literal('"'), "'\"'");
    }

    #[test]
    fn test_truncation_notice() {
        let out = render(|w| write_truncation(w, 10));
        assert_eq!(out, "  (Only the first 10 disallowed characters reported)\n");
    }

    #[test]
    fn test_scan_error_line() {
        let err = ScanError {
            path: PathBuf::from("locked.txt"),
            kind: ScanErrorKind::Open,
            message: "Permission denied (os error 13)".to_owned(),
        };
        let out = render(|w| write_scan_error(w, &err));
        assert_eq!(
            out,
            "Could not open file: locked.txt - Permission denied (os error 13), skipping\n"
        );
    }

    #[test]
    fn test_not_a_file_line() {
        let err = CheckError::NotAFile {
            path: PathBuf::from("src"),
        };
        let out = render(|w| write_check_error(w, &err));
        assert_eq!(out, "Path src is not a file\n");
    }
}
