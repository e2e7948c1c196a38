//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing middleware
//! - 404 fallback for any unmatched method or path
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:9090)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 9090)),
            cors_permissive: false,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// Build the application router: every `/api` route, `/health`, and the
/// not-found fallback, with tracing and CORS layers applied.
pub fn build_router(pool: PgPool, config: &ServerConfig) -> Router {
    let cors = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        let port = config.bind_addr.port();
        let origins: Vec<HeaderValue> = [
            format!("http://localhost:{port}"),
            format!("http://127.0.0.1:{port}"),
        ]
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api::router())
        .merge(routes::categories::router())
        .merge(routes::reviews::router())
        .merge(routes::users::router())
        .merge(routes::comments::router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState { pool }))
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// The caller owns the pool and closes it after this returns.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// run_server(pool.clone(), ServerConfig::default()).await?;
/// pool.close().await;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(pool, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    // The pool points at a closed port: requests that reach the store come
    // back as a fast 500, everything else is answered before it.
    fn app() -> Router {
        let pool = PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(500))
            .connect_lazy("postgres://127.0.0.1:1/gamereviews_unused")
            .expect("lazy pool");
        build_router(pool, &ServerConfig::default())
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 9090);
        assert!(!config.cors_permissive);
    }

    #[tokio::test]
    async fn unmatched_path_is_404() {
        let request = Request::builder().uri("/api/vategories").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "msg": "404 route not found." }));
    }

    #[tokio::test]
    async fn unmatched_method_is_404() {
        let request = json_request("PUT", "/api/categories", json!({}));
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["msg"], "404 route not found.");
    }

    #[tokio::test]
    async fn patch_without_inc_votes_is_400() {
        let request = json_request("PATCH", "/api/reviews/1", json!({ "name": "Mitch" }));
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "Invalid patch request, please reformat your patch");
    }

    #[tokio::test]
    async fn patch_with_non_numeric_inc_votes_is_400() {
        let request = json_request("PATCH", "/api/reviews/1", json!({ "inc_votes": "cat" }));
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "Invalid patch request, please reformat your patch");
    }

    #[tokio::test]
    async fn patch_with_unparseable_body_is_400() {
        let request = Request::builder()
            .method("PATCH")
            .uri("/api/reviews/1")
            .header("content-type", "application/json")
            .body(Body::from("{inc_votes"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "Invalid patch request, please reformat your patch");
    }

    #[tokio::test]
    async fn post_comment_without_author_is_400() {
        let request = json_request("POST", "/api/reviews/1/comments", json!({ "body": "hi" }));
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "Invalid post request, please reformat your post");
    }

    #[tokio::test]
    async fn post_comment_with_non_text_body_is_400() {
        let request = json_request(
            "POST",
            "/api/reviews/1/comments",
            json!({ "body": 42, "author": "mallionaire" }),
        );
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn undecodable_id_segment_is_bad_request() {
        let requests = [
            Request::builder().uri("/api/reviews/%FF").body(Body::empty()).unwrap(),
            json_request("PATCH", "/api/reviews/%FF", json!({ "inc_votes": 1 })),
            Request::builder().uri("/api/reviews/%FF/comments").body(Body::empty()).unwrap(),
            json_request(
                "POST",
                "/api/reviews/%FF/comments",
                json!({ "body": "hi", "author": "mallionaire" }),
            ),
            Request::builder()
                .method("DELETE")
                .uri("/api/comments/%FF")
                .body(Body::empty())
                .unwrap(),
        ];

        for request in requests {
            let uri = request.uri().clone();
            let (status, body) = send(request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body, json!({ "msg": "bad request" }), "{uri}");
        }
    }

    #[tokio::test]
    async fn patch_with_fractional_inc_votes_is_bad_request() {
        let request = json_request("PATCH", "/api/reviews/1", json!({ "inc_votes": 1.5 }));
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "msg": "bad request" }));
    }

    #[tokio::test]
    async fn repeated_review_list_parameter_reaches_the_store() {
        // Extraction must not reject; with no store behind the pool the
        // request ends in the generic 500 instead of a query-string 400.
        let request = Request::builder()
            .uri("/api/reviews?sort_by=a&sort_by=b")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "msg": "Internal server error" }));
    }

    #[tokio::test]
    async fn api_description_lists_endpoints() {
        let request = Request::builder().uri("/api").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["endpoints"]["GET /api/reviews"].is_object());
        assert!(body["endpoints"]["PATCH /api/reviews/:review_id"].is_object());
    }
}
