//! Log subscriber setup for hosts embedding huebar controls.

/// Installs a `tracing` subscriber reading `RUST_LOG`.
///
/// Falls back to `error,huebar_slider=info` when `RUST_LOG` is unset or
/// invalid. Calling it again once a subscriber is installed is a no-op.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,huebar_slider=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Installs a subscriber that writes through the test harness capture.
#[cfg(any(test, feature = "testing"))]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("trace"))
        .with_test_writer()
        .try_init();
}
