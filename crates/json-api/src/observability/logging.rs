//! Tracing subscriber assembly.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{
    ServerConfig,
    observability::{LogFormat, LoggingConfig},
};

use super::ObservabilityError;

type FmtLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Install the global subscriber: formatted output, the configured filter and, when a
/// tracer provider is given, span export.
pub(super) fn init_subscriber(
    config: &ServerConfig,
    tracer_provider: Option<&SdkTracerProvider>,
) -> Result<(), ObservabilityError> {
    let otel_layer = tracer_provider.map(|provider| {
        tracing_opentelemetry::layer()
            .with_tracer(provider.tracer(config.observability.otel_service_name.clone()))
    });

    tracing_subscriber::registry()
        .with(fmt_layer(config.logging.log_format))
        .with(env_filter(&config.logging)?)
        .with(otel_layer)
        .try_init()?;

    Ok(())
}

fn fmt_layer(format: LogFormat) -> FmtLayer {
    match format {
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
    }
}

fn env_filter(logging: &LoggingConfig) -> Result<EnvFilter, ObservabilityError> {
    Ok(EnvFilter::try_new(logging.filter_directives())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(level: &str) -> LoggingConfig {
        LoggingConfig {
            log_level: level.to_string(),
            log_format: LogFormat::Json,
            log_quiet_targets: vec!["sqlx".to_string(), "hyper".to_string()],
        }
    }

    #[test]
    fn filter_carries_level_and_quiet_targets() -> Result<(), ObservabilityError> {
        let rendered = env_filter(&logging("larder_json=debug,info"))?.to_string();

        assert!(rendered.contains("larder_json=debug"), "{rendered}");
        assert!(rendered.contains("sqlx=warn"), "{rendered}");
        assert!(rendered.contains("hyper=warn"), "{rendered}");

        Ok(())
    }

    #[test]
    fn malformed_level_is_an_error() {
        let result = env_filter(&logging("larder_json=loud"));

        assert!(
            matches!(result, Err(ObservabilityError::LogFilter(_))),
            "expected LogFilter, got {result:?}"
        );
    }
}
