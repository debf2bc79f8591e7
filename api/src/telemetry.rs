//! Tracing subscriber setup shared by both binaries

use ot_shared::Environment;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber
///
/// `RUST_LOG` wins; otherwise the environment's default filter applies.
pub fn init_tracing(environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_filter()));

    // A second install (tests) is not an error worth reporting
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
