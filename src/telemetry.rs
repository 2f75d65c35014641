use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. Defaults to `warn`; override with `RUST_LOG`.
///
/// Safe to call more than once: later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
