//! Preview Server
//!
//! Serves a built frontend directory over HTTP for local previews. Files are
//! served verbatim; the server renders nothing and knows nothing about the
//! hash routes, which never reach it.
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness probe with the crate version
//! - `GET /*` - Files from the dist directory; directories serve `index.html`

use std::path::{Path, PathBuf};

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::ServeConfig;

/// Preview server errors
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("Dist directory {0:?} does not exist; build the frontend first")]
    MissingDist(PathBuf),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(String),
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for a dist directory
pub fn build_router(dist_dir: &Path) -> Router {
    let static_files = ServeDir::new(dist_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/health", get(health))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
}

/// Serve until Ctrl+C or SIGTERM
pub async fn serve(config: &ServeConfig) -> Result<(), ServeError> {
    if !config.dist_dir.is_dir() {
        return Err(ServeError::MissingDist(config.dist_dir.clone()));
    }

    let router = build_router(&config.dist_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!("Serving {:?} on http://{}", config.dist_dir, addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServeError::Server(e.to_string()))?;

    tracing::info!("Preview server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    fn create_dist() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>folio</html>").unwrap();
        std::fs::create_dir(dir.path().join("img")).unwrap();
        std::fs::write(dir.path().join("img").join("a.png"), [0x89, b'P', b'N', b'G']).unwrap();
        dir
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let dist = create_dist();
        let (status, body) = get(build_router(dist.path()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_served_for_root() {
        let dist = create_dist();
        let (status, body) = get(build_router(dist.path()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<html>folio</html>");
    }

    #[tokio::test]
    async fn test_static_file_served() {
        let dist = create_dist();
        let (status, body) = get(build_router(dist.path()), "/img/a.png").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn test_missing_file_not_found() {
        let dist = create_dist();
        let (status, _) = get(build_router(dist.path()), "/img/missing.png").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_serve_requires_dist() {
        let dir = tempdir().unwrap();
        let config = ServeConfig {
            dist_dir: dir.path().join("dist"),
            ..ServeConfig::default()
        };

        let err = serve(&config).await.unwrap_err();
        assert!(matches!(err, ServeError::MissingDist(_)));
    }
}
