use std::io::Write;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use charset_validator::{
    CheckConfig, CheckError, DEFAULT_MAX_REPORTED, check_paths, output,
};
use clap::Parser;
use tracing::info;

use crate::logging;

/// Check that files only contain characters up to U+024F
/// (Basic Latin, Latin-1 Supplement, Latin Extended).
#[derive(Parser, Debug)]
#[command(name = "check-charset", version, about)]
struct Cli {
    /// Files to check, in order. Directories and missing paths stop the run.
    paths: Vec<PathBuf>,

    /// Maximum number of disallowed characters reported per file
    #[arg(long, value_name = "N", default_value_t = default_max_reported())]
    max_reported: NonZeroUsize,

    /// Verbosity level (-v for info, -vv for debug); `RUST_LOG` takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn default_max_reported() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_MAX_REPORTED).unwrap_or(NonZeroUsize::MIN)
}

/// Parse arguments, run the check and map the outcome to an exit code.
///
/// # Errors
///
/// Returns an error if the report cannot be written.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = CheckConfig::default();
    config.max_reported = cli.max_reported.get();

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    info!(paths = cli.paths.len(), "starting charset check");

    let code = match check_paths(&cli.paths, &config, &mut out, &mut err) {
        Ok(report) => {
            info!(
                files_readable = report.files_readable(),
                files_unreadable = report.files_unreadable,
                "checked {} file(s)",
                report.files_checked
            );
            if report.ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e @ CheckError::NotAFile { .. }) => {
            output::write_check_error(&mut out, &e).context("failed to write to stdout")?;
            ExitCode::FAILURE
        }
        Err(e) => return Err(e.into()),
    };

    out.flush().context("failed to flush stdout")?;
    Ok(code)
}
