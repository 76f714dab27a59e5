use std::io;
use std::sync::Arc;
use std::time::Instant;

use actix_web::dev::Service as _;
use actix_web::http::header::HeaderValue;
use actix_web::{middleware::Logger, web, App, HttpServer};
use locations_api::api::openapi::configure_swagger_ui;
use locations_api::api::routes::{self, AppState};
use locations_api::application::LocationService;
use locations_api::config::{AppConfig, LoggingConfig};
use locations_api::infrastructure::db::{migrations::run_migrations, pool::create_pool};
use locations_api::infrastructure::repositories::LocationRepositoryImpl;
use locations_api::middleware::request_logging::{
    create_request_span, get_client_ip, get_request_id, get_status_class, get_user_agent,
    REQUEST_ID_HEADER,
};
use locations_api::observability::error_tracking::capture_unexpected_5xx;
use locations_api::observability::AppMetrics;
use locations_api::security::{cors_middleware, global_rate_limiting, security_headers};
use tracing::{info, Instrument};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()
        .map_err(|e| io::Error::other(format!("failed to load application configuration: {e}")))?;
    config.validate().map_err(io::Error::other)?;

    init_tracing(&config.logging);

    let pool = create_pool(&config.database)
        .await
        .map_err(|e| io::Error::other(format!("failed to create database pool: {e}")))?;

    run_migrations(&pool)
        .await
        .map_err(|e| io::Error::other(format!("database migrations failed: {e}")))?;

    let location_repo = Arc::new(LocationRepositoryImpl::new(pool.clone()));
    let state = AppState {
        location_service: Arc::new(LocationService::new(location_repo)),
        security: config.security.clone(),
        metrics: Arc::new(AppMetrics::default()),
        db_pool: Some(pool),
    };

    // Built once so every worker shares the same per-IP quota store.
    let rate_limiter = global_rate_limiting(&config.security).map_err(io::Error::other)?;

    let bind_host = config.host.clone();
    let bind_port = config.port;
    let security_config = config.security.clone();
    let metrics = state.metrics.clone();

    info!(
        host = %bind_host,
        port = bind_port,
        environment = %config.environment,
        "starting locations api"
    );

    HttpServer::new(move || {
        let metrics = metrics.clone();
        App::new()
            .wrap(Logger::default())
            .wrap_fn(move |req, srv| {
                let request_id = get_request_id(&req);
                let path = req.path().to_string();
                let method = req.method().to_string();
                let span = create_request_span(
                    &request_id,
                    &method,
                    &path,
                    &get_client_ip(&req),
                    &get_user_agent(&req),
                );
                let metrics = metrics.clone();
                let start = Instant::now();

                let fut = srv.call(req);
                async move {
                    let mut response = fut.await?;
                    if let Ok(value) = HeaderValue::from_str(&request_id) {
                        response.headers_mut().insert(REQUEST_ID_HEADER, value);
                    }

                    let status = response.status().as_u16();
                    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    metrics.record_request(status, latency_ms);

                    info!(
                        status = status,
                        status_class = get_status_class(status),
                        latency_ms = latency_ms,
                        "request completed"
                    );

                    capture_unexpected_5xx(&path, &method, status, &request_id);
                    Ok::<_, actix_web::Error>(response)
                }
                .instrument(span)
            })
            .wrap(cors_middleware(&security_config))
            .wrap(security_headers())
            .wrap(rate_limiter.clone())
            .app_data(web::Data::new(state.clone()))
            .configure(configure_swagger_ui)
            .configure(routes::configure)
    })
    .bind((bind_host, bind_port))?
    .run()
    .await
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
