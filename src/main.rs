use actix_cors::Cors;
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use photographer_portfolio::{
    background_task::start_session_purge_task,
    graceful_shutdown::shutdown_signal,
    repositories::catalog::JsonCatalogRepo,
    routes::configure_routes,
    settings::{AppConfig, LogFormat},
    AppState,
};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn build_cors(origins: &[String]) -> Cors {
    if origins.iter().any(|o| o == "*") {
        return Cors::permissive();
    }

    origins.iter().fold(
        Cors::default()
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allow_any_header()
            .max_age(3600),
        |cors, origin| cors.allowed_origin(origin),
    )
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => {
            init_tracing(cfg.log_format);
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            init_tracing(LogFormat::Pretty);
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let catalog_repo = match JsonCatalogRepo::load(&config.data_path).await {
        Ok(repo) => repo,
        Err(e) => {
            tracing::error!("Failed to load catalog from {}: {}", config.data_path, e);
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState::new(&config, catalog_repo));
    let server_addr = config.server_addr();

    tracing::info!(
        "🚀 Starting photographer portfolio v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let sessions = app_state.lightbox_sessions.clone();
    let origins = config.cors_origins();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(build_cors(&origins))
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(&server_addr)?
    .run();

    tokio::spawn(start_session_purge_task(
        sessions.clone(),
        config.purge_interval(),
        config.session_ttl(),
    ));

    let result = tokio::select! {
        res = server => res,
        reason = shutdown_signal() => {
            tracing::info!(?reason, "Shutdown requested");
            Ok(())
        }
    };

    let closed = sessions.close_all();
    tracing::info!("Closed {} open lightboxes", closed);

    result
}
