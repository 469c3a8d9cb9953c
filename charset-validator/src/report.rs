//! Check report types.

/// Result of a check run that was not aborted.
///
/// `ok` only reflects disallowed characters. Files that could not be read
/// are counted in `files_unreadable` but never make a run fail on their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct CheckReport {
    /// Number of paths that were scanned (readable or not).
    pub files_checked: usize,
    /// Number of files with at least one disallowed character.
    pub files_failed: usize,
    /// Number of files whose scan was aborted by an open/read/decode error.
    pub files_unreadable: usize,
    /// Number of violations printed across all files.
    pub violations_reported: usize,
    /// Whether no file contained a disallowed character.
    pub ok: bool,
}

impl CheckReport {
    pub(crate) fn new() -> Self {
        Self {
            ok: true,
            ..Self::default()
        }
    }

    /// Number of files that were read to completion (or to the report cap).
    #[must_use]
    pub fn files_readable(&self) -> usize {
        self.files_checked - self.files_unreadable
    }
}
