use tracing_subscriber::{fmt, EnvFilter};

use crate::settings::AppConfig;

/// Installs the global subscriber. `RUST_LOG` wins over the default filter;
/// production logs are emitted as JSON lines.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    let builder = fmt().with_env_filter(filter).with_target(false);

    let result = if config.is_production() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Tracing subscriber already installed: {}", e);
    }
}
