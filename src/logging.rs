use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const ENV_LOG_JSON: &str = "CATALOG_ADMIN_LOG_JSON";

/// Install the global subscriber. `RUST_LOG` wins over `default_directive`;
/// `CATALOG_ADMIN_LOG_JSON=1` switches to JSON lines. Logs go to stderr so
/// command output on stdout stays machine-readable.
pub fn init(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let json = std::env::var(ENV_LOG_JSON)
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
}
