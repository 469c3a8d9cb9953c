//! Configuration types for charset validation.
//!
//! There is no configuration file; callers (the CLI, tests) build a
//! [`CheckConfig`] directly.

/// Highest code point allowed by default: the last code point of the
/// Latin Extended blocks.
pub const DEFAULT_MAX_CODE_POINT: u32 = 0x024F;

/// Number of violations reported per file before the scan of that file stops.
pub const DEFAULT_MAX_REPORTED: usize = 10;

/// Options for a check run.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CheckConfig {
    /// Characters whose code point is strictly greater than this are
    /// violations (default: `0x024F`).
    pub max_code_point: u32,
    /// Maximum violations printed per file (default: 10).
    /// A value of 0 behaves like 1.
    pub max_reported: usize,
}

impl CheckConfig {
    /// Effective per-file report cap, never below one.
    pub(crate) fn report_limit(&self) -> usize {
        self.max_reported.max(1)
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            max_code_point: DEFAULT_MAX_CODE_POINT,
            max_reported: DEFAULT_MAX_REPORTED,
        }
    }
}
