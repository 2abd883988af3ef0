use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

/// Compose multiple layers into a `tracing`'s subscriber.
///
/// We are using `impl Subscriber` as return type to avoid having to
/// spell out the actual type of the returned subscriber, which is
/// indeed quite complex.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    // Higher-ranked trait bound: `Sink` implements `MakeWriter`
    // for every choice of the lifetime parameter `'a`.
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    // `RUST_LOG` wins over the default filter level
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Register a subscriber as global default to process span data.
/// Also redirects `log` records emitted by our dependencies into `tracing`.
///
/// It should only be called once!
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync + 'static) {
    subscriber.init();
}
