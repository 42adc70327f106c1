pub mod error;
pub mod telemetry;
pub mod traits;
pub mod types;

pub use error::*;
pub use telemetry::*;
pub use traits::*;
pub use types::*;

/// Logging utilities
pub mod logging {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    /// Initialize logging with default configuration
    pub fn init_logging() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Initialize logging with custom level
    pub fn init_logging_with_level(level: &str) {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(level))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
