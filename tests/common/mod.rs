use tracing_subscriber::EnvFilter;

/// Routes library tracing into the test output; `RUST_LOG=nillable=trace`
/// shows every rejected value.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
