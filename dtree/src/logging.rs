use log::LevelFilter;

/// Send log records to stderr. Warnings and errors are always shown; `debug`
/// lowers the threshold to debug records. `RUST_LOG` takes precedence when set.
pub fn init(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .parse_default_env();

    // A logger may already be installed when running under the test harness.
    let _ = builder.try_init();
}
