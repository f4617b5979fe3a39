use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// Reads the filter from `RUST_LOG` and falls back to `info`,
/// e.g. `RUST_LOG=sales_desk=debug`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Test subscriber; safe to call from every test.
#[cfg(test)]
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
