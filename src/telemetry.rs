use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global tracing subscriber.
///
/// Filtering follows the usual `RUST_LOG` environment variable; the
/// multiply/divide trace events are emitted at debug level. Returns an error
/// if a subscriber is already installed, which callers embedding their own
/// telemetry can safely ignore.
pub fn init() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
