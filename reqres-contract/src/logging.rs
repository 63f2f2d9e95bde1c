use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INITIALIZE_LOGGING: Once = Once::new();

/// Routes `tracing` output through the test harness' captured stdout. Safe to call from every test.
pub fn init_test_logging() {
    INITIALIZE_LOGGING.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| "reqres_contract=info".into()),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .without_time(),
            )
            .try_init();
    });
}
