use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `--debug` forces the `debug` level for this crate; otherwise `RUST_LOG`
/// applies with `warn` as the floor.
pub(crate) fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("scicalc=debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init();
}
