use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    middleware,
    routing::{any, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::error::ApiError;
use crate::middleware::trace_id;
use crate::routes::{
    batteries, battery_types, customers, dashboard, frontend, health, health_access,
    internet_access, rentals, water_sales,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let api_routes = Router::new()
        // Dashboard
        .route("/api/dashboard/stats", get(dashboard::dashboard_stats))
        // Customers
        .route(
            "/api/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/api/customers/:customer_id",
            get(customers::get_customer).put(customers::update_customer),
        )
        .route(
            "/api/customers/:customer_id/photos/:kind",
            get(customers::get_customer_photo),
        )
        // Battery catalog and inventory
        .route(
            "/api/battery-types",
            get(battery_types::list_battery_types).post(battery_types::create_battery_type),
        )
        .route("/api/batteries", get(batteries::list_batteries))
        .route(
            "/api/batteries/:battery_id",
            put(batteries::update_battery).delete(batteries::delete_battery),
        )
        // Rentals
        .route(
            "/api/rentals",
            get(rentals::list_rentals).post(rentals::create_rental),
        )
        .route("/api/rentals/:rental_id/return", post(rentals::return_rental))
        // Water sales
        .route(
            "/api/water-sales",
            get(water_sales::list_water_sales).post(water_sales::create_water_sale),
        )
        // Internet access vouchers
        .route(
            "/api/internet-access",
            get(internet_access::list_internet_access).post(internet_access::create_internet_access),
        )
        // Health visit log
        .route(
            "/api/health-access",
            get(health_access::list_health_access).post(health_access::create_health_access),
        )
        .route(
            "/api/health-access/:visit_id",
            get(health_access::get_health_access),
        )
        // Service health
        .route("/api/health", get(health::health_check))
        // Unknown /api paths stay JSON; only non-API paths fall through to
        // the SPA shell
        .route("/api/*path", any(api_not_found));

    Router::new()
        .merge(api_routes)
        // Anything outside /api serves the SPA with index fallback
        .fallback(frontend::serve_spa)
        // Global middleware (order matters: bottom layers run first)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}

async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No such API route: {}", uri.path()))
}
