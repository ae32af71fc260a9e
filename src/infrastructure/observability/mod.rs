use crate::config::Config;
use metrics::{describe_counter, Unit};
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace as sdktrace, Resource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const DEFAULT_FILTER: &str = "holiday_rota=debug,tower_http=debug";

/// Assignment runs, labelled by `outcome`
pub const AUTO_ASSIGN_RUNS: &str = "holiday_auto_assign_runs_total";

/// Holiday dates written by successful runs
pub const DATES_ASSIGNED: &str = "holiday_dates_assigned_total";

/// Flushes pending spans when the server exits
pub struct ObservabilityGuard;

impl Drop for ObservabilityGuard {
    fn drop(&mut self) {
        global::shutdown_tracer_provider();
    }
}

pub fn init(config: &Config) -> anyhow::Result<ObservabilityGuard> {
    init_tracing(config)?;
    install_prometheus(config.metrics_port)?;
    describe_rota_metrics();
    Ok(ObservabilityGuard)
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let otel_layer = match &config.otel_exporter_endpoint {
        Some(endpoint) => {
            let tracer = otlp_tracer(endpoint, &config.service_name)?;
            Some(tracing_opentelemetry::layer().with_tracer(tracer))
        }
        None => None,
    };

    Registry::default()
        .with(log_filter())
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(otel_layer)
        .try_init()?;

    if let Some(endpoint) = &config.otel_exporter_endpoint {
        tracing::info!("Exporting spans for {} to {}", config.service_name, endpoint);
    }
    Ok(())
}

fn otlp_tracer(endpoint: &str, service_name: &str) -> anyhow::Result<sdktrace::Tracer> {
    let resource = Resource::new(vec![KeyValue::new("service.name", service_name.to_string())]);

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(endpoint),
        )
        .with_trace_config(sdktrace::config().with_resource(resource))
        .install_batch(runtime::Tokio)?;

    Ok(tracer)
}

fn install_prometheus(port: u16) -> anyhow::Result<()> {
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()?;

    tracing::info!("Prometheus metrics on :{}/metrics", port);
    Ok(())
}

fn describe_rota_metrics() {
    describe_counter!(
        AUTO_ASSIGN_RUNS,
        Unit::Count,
        "Holiday auto-assign runs by outcome (success, no_employees, no_dates, invalid_year, persistence_failure, internal)"
    );
    describe_counter!(
        DATES_ASSIGNED,
        Unit::Count,
        "Holiday dates assigned by committed auto-assign runs"
    );
}
