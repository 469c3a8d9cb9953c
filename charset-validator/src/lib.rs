//! # charset-validator
//!
//! Checks that text files only contain characters up to a code point ceiling
//! (by default U+024F: Basic Latin, Latin-1 Supplement and the Latin Extended
//! blocks).
//!
//! The crate is split into a lazy per-file **scanner** and a sequential
//! **driver** that prints findings and decides whether the run passed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use charset_validator::{check_paths, CheckConfig};
//!
//! let paths = vec![PathBuf::from("README.md")];
//! let mut stdout = std::io::stdout();
//! let mut stderr = std::io::stderr();
//!
//! let report = check_paths(&paths, &CheckConfig::default(), &mut stdout, &mut stderr).unwrap();
//! println!("Files checked: {}", report.files_checked);
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod error;
pub mod output;
mod report;
mod scanner;

pub use config::{CheckConfig, DEFAULT_MAX_CODE_POINT, DEFAULT_MAX_REPORTED};
pub use error::{CheckError, ScanError, ScanErrorKind, Violation};
pub use report::CheckReport;
pub use scanner::{DECODE_CHUNK_SIZE, DisallowedChars, find_disallowed_chars};

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

/// Check every path in order, writing violations to `out` and read
/// diagnostics to `err`.
///
/// Paths are processed strictly one after another. At most
/// `config.max_reported` violations are written per file, followed by a
/// truncation notice, after which the rest of that file is skipped.
///
/// # Errors
///
/// Returns [`CheckError::NotAFile`] as soon as a path is not an existing
/// regular file; paths after it are never checked. Output already written for
/// earlier paths stays written.
///
/// Returns [`CheckError::Io`] if writing to `out` or `err` fails.
///
/// A file that cannot be opened, read or decoded is not an error: its
/// diagnostic goes to `err`, it counts towards `files_unreadable`, and the
/// run continues.
pub fn check_paths<P: AsRef<Path>>(
    paths: &[P],
    config: &CheckConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<CheckReport, CheckError> {
    let mut report = CheckReport::new();
    let limit = config.report_limit();

    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CheckError::NotAFile {
                path: path.to_owned(),
            });
        }

        debug!(path = %path.display(), "checking file");
        report.files_checked += 1;

        let mut reported: usize = 0;
        for item in find_disallowed_chars(path, config.max_code_point) {
            match item {
                Ok(violation) => {
                    reported += 1;
                    output::write_violation(out, path, &violation)?;
                    if reported >= limit {
                        output::write_truncation(out, limit)?;
                        debug!(path = %path.display(), limit, "report limit reached");
                        break;
                    }
                }
                Err(scan_error) => {
                    debug!(
                        path = %path.display(),
                        kind = ?scan_error.kind,
                        error = %scan_error.message,
                        "scan aborted"
                    );
                    output::write_scan_error(err, &scan_error)?;
                    report.files_unreadable += 1;
                }
            }
        }

        if reported > 0 {
            report.files_failed += 1;
            report.violations_reported += reported;
            report.ok = false;
        }
    }

    info!(
        files_checked = report.files_checked,
        files_failed = report.files_failed,
        files_unreadable = report.files_unreadable,
        violations = report.violations_reported,
        "charset check finished"
    );
    Ok(report)
}
