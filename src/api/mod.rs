//! HTTP surface for zip code lookup
//!
//! Serves the HTML search page and a small JSON API over the same service.

pub mod handlers;
pub mod service;

pub use service::LookupService;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(service: LookupService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Page
        .route("/", get(handlers::index))
        .route("/search", get(handlers::search_page))
        // JSON API
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/stats", get(handlers::get_stats))
        .route("/api/v1/search", get(handlers::search))
        .route("/api/v1/zipcodes/:code", get(handlers::get_zipcode))
        // State and middleware
        .with_state(Arc::new(service))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::lookup::MatchMode;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let (dataset, _) = Dataset::bundled();
        create_router(LookupService::new(dataset, MatchMode::Exact))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_is_idle() {
        let (status, body) = get(app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Enter a zip code to search."));
        assert!(!body.contains("No results"));
    }

    #[tokio::test]
    async fn test_search_page_match() {
        let (status, body) = get(app(), "/search?q=90210").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Beverly Hills, CA"));
    }

    #[tokio::test]
    async fn test_search_page_trims_query() {
        let (_, body) = get(app(), "/search?q=%2090210%20").await;
        assert!(body.contains("Beverly Hills, CA"));
    }

    #[tokio::test]
    async fn test_search_page_no_results() {
        let (status, body) = get(app(), "/search?q=00000").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No results for '00000'"));
    }

    #[tokio::test]
    async fn test_search_page_missing_query_is_idle() {
        let (_, body) = get(app(), "/search").await;
        assert!(body.contains("Enter a zip code to search."));
    }

    #[tokio::test]
    async fn test_json_search() {
        let (status, body) = get(app(), "/api/v1/search?q=90210").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["results"][0]["location"], "Beverly Hills, CA");
    }

    #[tokio::test]
    async fn test_json_and_page_echo_same_query() {
        let (_, body) = get(app(), "/api/v1/search?q=%20k1a%20").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["query"], "k1a");
        assert_eq!(json["count"], 0);

        let (_, page) = get(app(), "/search?q=%20k1a%20").await;
        assert!(page.contains("No results for 'k1a'"));
    }

    #[tokio::test]
    async fn test_json_search_empty_query() {
        let (_, body) = get(app(), "/api/v1/search?q=").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["count"], 0);
    }

    #[tokio::test]
    async fn test_get_zipcode() {
        let (status, body) = get(app(), "/api/v1/zipcodes/02108").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["city"], "Boston");
        assert_eq!(json["state"], "MA");

        let (status, _) = get(app(), "/api/v1/zipcodes/00000").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_and_stats() {
        let (status, body) = get(app(), "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("ok"));

        let (_, body) = get(app(), "/api/v1/stats").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["match_mode"], "exact");
        assert!(json["records"].as_u64().unwrap() > 0);
    }
}
