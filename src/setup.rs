use env_logger::DEFAULT_FILTER_ENV;
use log::LevelFilter;

/// Sets the behavior of the logger, based on passed environment variables
/// such as `RUST_LOG`. Logs go to stderr so they never mix with the report.
pub fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::default();
    builder.filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn });

    let has_debug = std::env::var(DEFAULT_FILTER_ENV).map(|v| v.contains("debug")).unwrap_or(false);

    if verbose || has_debug {
        builder.format_timestamp_millis();
    } else {
        builder.format_timestamp(None).format_target(false);
    }

    // Overwrite the defaults from env
    builder.parse_default_env();

    // A logger installed earlier (e.g. by a test harness) wins.
    if builder.try_init().is_err() {}
}
