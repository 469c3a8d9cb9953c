use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Log level used when `RUST_LOG` is not set.
///
/// Without `-v` only warnings are shown so the report on stdout and the
/// read diagnostics on stderr are the only output.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global `tracing` subscriber. Logs always go to stderr.
///
/// A subscriber installed earlier is kept.
pub fn init(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_from_verbosity() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(9), "debug");
    }

    #[test]
    fn test_init_twice_keeps_first() {
        init(0);
        init(2);
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(!tracing::enabled!(tracing::Level::DEBUG));
        }
    }
}
