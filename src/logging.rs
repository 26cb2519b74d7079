use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a log level
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the stderr subscriber. `RUST_LOG` directives are honoured on top
/// of the level chosen by `verbosity`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::from_default_env().add_directive(level_for_verbosity(verbosity).into());

    // try_init so a second call (tests, embedding) is not fatal
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
