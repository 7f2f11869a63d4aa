//! Shared logging setup for unit and integration tests.

use std::sync::Once;

use tracing::info;
use tracing_subscriber::EnvFilter;

static TEST_SETUP: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Honours `RUST_LOG`; defaults to `comida=trace`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("comida=trace"));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_test_writer()
            .try_init();
        if let Err(e) = installed {
            eprintln!("Error: Failed to set up logging: {}", e);
        }
        info!("Test Setup complete");
    });
}
