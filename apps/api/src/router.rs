use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use booking_cell::router::booking_routes;
use booking_cell::BookingService;
use shared_config::AppConfig;

pub fn create_router(config: Arc<AppConfig>, service: BookingService) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic Booking API is running!" }))
        .merge(booking_routes(config, service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_reports_running() {
        let app = create_router(Arc::new(AppConfig::default()), BookingService::seeded());

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Clinic Booking API is running!");
    }

    #[tokio::test]
    async fn test_graphql_endpoint_is_mounted() {
        let app = create_router(Arc::new(AppConfig::default()), BookingService::seeded());

        let request = Request::builder()
            .method("POST")
            .uri("/graphql")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"query":"{ getDoctorDetails(doctor_id: 3) { doctor_name } }"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["getDoctorDetails"]["doctor_name"], "gamma");
    }
}
