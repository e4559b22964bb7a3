use axum::http::HeaderValue;
use axum::Router;
use netpanel_api::{create_api_routes, AppState};
use netpanel_domain::{config::ServerConfig, Config};
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn start_web_server(config: &Config, state: AppState) -> anyhow::Result<()> {
    let addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    let app = create_app(&config.server, state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Web server listening");
    info!("API: http://{}/api", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn create_app(server: &ServerConfig, state: AppState) -> Router {
    let mut app = Router::new().nest("/api", create_api_routes(state));

    if let Some(dir) = &server.static_dir {
        info!(static_dir = %dir, "Serving dashboard assets");
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors_layer(&server.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
