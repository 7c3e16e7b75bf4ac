use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{
    BunyanFormattingLayer,
    JsonStorageLayer,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{
    EnvFilter,
    Registry,
};

/// Install the process-wide subscriber: bunyan JSON lines on stdout.
///
/// `RUST_LOG` takes precedence over `env_filter`. Must be called once per
/// process; a second call is ignored with a warning.
pub fn setup_tracing(name: String, env_filter: String) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, std::io::stdout);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    if let Err(e) = set_global_default(subscriber) {
        tracing::warn!("Tracing already initialised: {}", e);
    }
}
