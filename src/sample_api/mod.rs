//! Sample OctoFit API
//!
//! A small axum server that serves the seed data so the dashboard can be
//! run without the Django backend.
//!
//! # Endpoints
//!
//! - `GET /api/` - API root listing each collection URL
//! - `GET /api/activities/` - Activities
//! - `GET /api/workouts/` - Workouts
//! - `GET /api/teams/` - Teams with expanded members
//! - `GET /api/leaderboard/` - Leaderboard, highest score first
//! - `GET /api/users/` - Users
//! - `GET /health/live` - Liveness probe

mod error;
mod fixtures;

pub use error::SampleApiError;
pub use fixtures::Fixtures;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SampleApiConfig;
use crate::resources::ResourceKind;

/// Build the router over a fixed data set
pub fn build_router(fixtures: Fixtures, config: &SampleApiConfig) -> Router {
    Router::new()
        .route("/api", get(api_root))
        .route("/api/", get(api_root))
        .route("/api/:resource", get(list_resource))
        .route("/api/:resource/", get(list_resource))
        .route("/health/live", get(liveness))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
        .with_state(Arc::new(fixtures))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if allowed.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new().allow_origin(AllowOrigin::list(allowed))
    }
}

/// Start the sample API server
pub async fn serve(fixtures: Fixtures, config: &SampleApiConfig) -> Result<(), SampleApiError> {
    let router = build_router(fixtures, config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("OctoFit sample API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SampleApiError::Server(e.to_string()))?;

    tracing::info!("OctoFit sample API shut down gracefully");
    Ok(())
}

/// GET /api/
async fn api_root(headers: HeaderMap) -> Json<Value> {
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost:8000");

    let links: Map<String, Value> = ResourceKind::ALL
        .iter()
        .map(|kind| {
            (
                kind.name().to_string(),
                Value::String(format!("http://{}/api/{}", host, kind.path())),
            )
        })
        .collect();

    Json(Value::Object(links))
}

/// GET /api/:resource/
async fn list_resource(
    State(fixtures): State<Arc<Fixtures>>,
    Path(resource): Path<String>,
) -> Result<Json<Value>, SampleApiError> {
    let kind = ResourceKind::from_name(&resource)
        .ok_or_else(|| SampleApiError::NotFound(resource.clone()))?;

    tracing::debug!(resource = %kind, "Serving resource list");
    Ok(Json(fixtures.list(kind).clone()))
}

/// GET /health/live
async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn app() -> Router {
        build_router(Fixtures::seed(), &SampleApiConfig::default())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = app()
            .oneshot(Request::builder().uri("/health/live").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_every_resource_is_a_json_array() {
        for kind in ResourceKind::ALL {
            let (status, body) = get_json(&format!("/api/{}", kind.path())).await;
            assert_eq!(status, StatusCode::OK, "{}", kind);
            assert_eq!(body.as_array().map(Vec::len), Some(match kind {
                ResourceKind::Teams => 2,
                _ => 5,
            }));
        }
    }

    #[tokio::test]
    async fn test_unknown_resource_is_404() {
        let (status, body) = get_json("/api/profiles/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Not found.");
    }

    #[tokio::test]
    async fn test_api_root_lists_collections() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/")
                    .header(header::HOST, "octofit.test:8000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let root: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(root["leaderboard"], "http://octofit.test:8000/api/leaderboard/");
        assert_eq!(root.as_object().map(Map::len), Some(5));
    }
}
