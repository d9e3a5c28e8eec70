// Process-level initialization: logging/tracing setup.

/// Initialize tracing for the job.
///
/// `RUST_LOG` wins over the configured level so operators can raise
/// verbosity per module without touching job configuration. Idempotent:
/// a second call is ignored.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer());

    let _ = tracing::subscriber::set_global_default(registry);
}
