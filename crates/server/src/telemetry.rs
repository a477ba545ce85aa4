use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use serde::Deserialize;
use shared_types::Role;
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Keep the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Install the `tracing` subscriber: `RUST_LOG` filter (default `info`)
/// and a fmt layer on stderr.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // Built without `tracing-log`, so the `log` facade stays free for the
    // OTLP bridge installed by `init_telemetry`.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Apply the collector endpoint, TLS for `https://` and the SigNoz
/// ingestion key to an OTLP exporter builder.
fn configure_exporter<B>(builder: B, endpoint: &str) -> B
where
    B: WithExportConfig + WithTonicConfig,
{
    let mut builder = builder.with_endpoint(endpoint);

    if endpoint.starts_with("https://") {
        builder = builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }

    if let Ok(key) = std::env::var("SIGNOZ_INGESTION_KEY") {
        if !key.is_empty() {
            match key.parse() {
                Ok(value) => {
                    let mut metadata =
                        opentelemetry_otlp::tonic_types::metadata::MetadataMap::new();
                    metadata.insert("signoz-ingestion-key", value);
                    builder = builder.with_metadata(metadata);
                }
                Err(_) => tracing::warn!("SIGNOZ_INGESTION_KEY is not valid metadata, sending without it"),
            }
        }
    }

    builder
}

/// Set up OTLP export of traces and `log` records.
///
/// Must run inside the Tokio runtime. Reads config from environment:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT` collector gRPC address, e.g.
///       `http://localhost:4317` or `https://ingest.{region}.signoz.cloud:443`
///   - `OTEL_SERVICE_NAME` service name tag (default: `caseboard`)
///   - `SIGNOZ_INGESTION_KEY` SigNoz Cloud access token (optional for local)
///   - `DEPLOY_ENV` deployment environment tag (default: `development`)
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let endpoint = match std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(ep) => ep,
        Err(_) => {
            tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
            return;
        }
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "caseboard".to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    let span_exporter = match configure_exporter(
        opentelemetry_otlp::SpanExporter::builder().with_tonic(),
        &endpoint,
    )
    .build()
    {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::warn!("Failed to create OTLP span exporter ({e}), telemetry disabled");
            return;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(provider);

    // -- Log exporter (uses the `log` crate, not the `tracing` subscriber) --
    let log_exporter = match configure_exporter(
        opentelemetry_otlp::LogExporter::builder().with_tonic(),
        &endpoint,
    )
    .build()
    {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::warn!("Failed to create OTLP log exporter ({e}), exporting traces only");
            return;
        }
    };

    let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build()
    });

    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
    match log::set_boxed_logger(Box::new(bridge)) {
        Ok(()) => {
            log::set_max_level(log::LevelFilter::Info);
            tracing::info!("Log bridge active, logs exporting to {endpoint}");
        }
        Err(_) => {
            tracing::warn!("Log bridge skipped, log crate logger already set");
        }
    }

    tracing::info!("Telemetry initialized v{APP_VERSION}, traces exporting to {endpoint}");
}

#[derive(Deserialize)]
struct RoleQuery {
    role: Option<String>,
}

/// Dashboard role addressed by a request, if any.
///
/// Role endpoints carry it in the path; the dispatching endpoint carries
/// it in the `role` query parameter.
fn dashboard_role(path: &str, query: Option<&str>) -> Option<&'static str> {
    match path {
        "/api/dashboard/judge" => return Some(Role::Judge.as_str()),
        "/api/dashboard/lawyer" => return Some(Role::Lawyer.as_str()),
        "/api/dashboard/admin" => return Some(Role::Administrator.as_str()),
        "/api/dashboard" => {}
        _ => return None,
    }

    let role = match serde_urlencoded::from_str::<RoleQuery>(query?) {
        Ok(parsed) => parsed.role?,
        Err(_) => return Some("unknown"),
    };
    let role = match role.as_str() {
        "judge" => Role::Judge,
        "lawyer" => Role::Lawyer,
        "administrator" | "admin" => Role::Administrator,
        _ => return Some("unknown"),
    };
    Some(role.as_str())
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
///
/// Captures: method, path, user-agent, request ID, dashboard role and
/// response status.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer("caseboard");
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let user_agent = req
            .headers()
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let request_id = req
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let mut attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("http.user_agent", user_agent),
            KeyValue::new("http.request_id", request_id),
        ];
        if let Some(role) = dashboard_role(&path, req.uri().query()) {
            attributes.push(KeyValue::new("dashboard.role", role));
        }

        let span = tracer
            .span_builder(format!("{} {}", &method, &path))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}
