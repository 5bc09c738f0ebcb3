use axum::{
    handler::Handler,
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::{handlers, system};
use system::auth::middleware::require_admin;

/// Configure every route of the application
pub fn configure_routes(static_dir: &str) -> Router {
    let admin = || middleware::from_fn(require_admin);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES
        // ========================================
        .route("/api/system/auth/login", post(system::handlers::auth::login))
        .route(
            "/api/system/auth/password-reset",
            post(system::handlers::auth::request_password_reset),
        )
        .route(
            "/api/system/auth/password-reset/confirm",
            post(system::handlers::auth::confirm_password_reset),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_admin).layer(admin()),
        )
        // ========================================
        // COLLECTIONS
        // ========================================
        // A001 Contact inquiries: public append, admin read
        .route(
            "/api/contacts",
            post(handlers::a001_contact_inquiry::create)
                .get(handlers::a001_contact_inquiry::list.layer(admin())),
        )
        // A002 Gallery images: public read, admin writes
        .route(
            "/api/gallery",
            get(handlers::a002_gallery_image::list)
                .post(handlers::a002_gallery_image::create.layer(admin())),
        )
        .route(
            "/api/gallery/:id",
            put(handlers::a002_gallery_image::update)
                .delete(handlers::a002_gallery_image::delete)
                .layer(admin()),
        )
        // A003 Pricing
        .route("/api/pricing", get(handlers::a003_pricing_item::list))
        .route(
            "/api/pricing/schema",
            get(handlers::a003_pricing_item::schema).layer(admin()),
        )
        .route(
            "/api/pricing/:id",
            put(handlers::a003_pricing_item::update).layer(admin()),
        )
        // A004 Orders: public checkout, admin read and status changes
        .route(
            "/api/orders",
            post(handlers::a004_order::create).get(handlers::a004_order::list.layer(admin())),
        )
        .route(
            "/api/orders/:id/status",
            post(handlers::a004_order::change_status).layer(admin()),
        )
        .fallback_service(ServeDir::new(static_dir))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    fn request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn health_is_public() {
        let response = configure_routes("dist")
            .oneshot(request(Method::GET, "/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn admin_routes_require_a_token() {
        for (method, uri) in [
            (Method::GET, "/api/contacts"),
            (Method::GET, "/api/orders"),
            (Method::POST, "/api/orders/1/status"),
            (Method::POST, "/api/gallery"),
            (Method::DELETE, "/api/gallery/1"),
            (Method::PUT, "/api/pricing/1"),
            (Method::GET, "/api/pricing/schema"),
            (Method::GET, "/api/system/auth/me"),
        ] {
            let response = configure_routes("dist")
                .oneshot(request(method.clone(), uri))
                .await
                .unwrap();
            assert_eq!(
                response.status(),
                StatusCode::UNAUTHORIZED,
                "{} {}",
                method,
                uri
            );
        }
    }
}
