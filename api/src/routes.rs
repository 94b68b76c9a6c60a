// HTTP routes and middleware stack

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, Router};
use http::{header, Method, StatusCode};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    find_asset, find_block, find_transaction, get_asset_descriptions, get_assets, get_blocks,
    get_head, get_transactions, health_check, upsert_blocks, AppState,
};

/// Block uploads carry up to a few thousand blocks
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Slow requests are answered with 408
pub fn request_timeout_layer(request_timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout)
}

pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    // Configure CORS policy
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::AUTHORIZATION,
        ])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health_check))
        .route("/blocks", get(get_blocks).post(upsert_blocks))
        .route("/blocks/head", get(get_head))
        .route("/blocks/find", get(find_block))
        .route("/transactions", get(get_transactions))
        .route("/transactions/find", get(find_transaction))
        .route("/assets", get(get_assets))
        .route("/assets/find", get(find_asset))
        .route("/asset_descriptions", get(get_asset_descriptions))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(request_timeout_layer(request_timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn slow_requests_time_out_with_408() {
        let app: Router = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .layer(request_timeout_layer(Duration::from_millis(20)));

        let request = Request::builder().uri("/slow").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
