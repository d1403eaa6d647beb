//! 应用层：路由与共享状态

pub mod menu;
pub mod order;

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use menu::MenuService;
use order::OrderService;

#[derive(Clone)]
pub struct AppState {
    pub menu_service: MenuService,
    pub order_service: OrderService,
}

impl AppState {
    pub fn new() -> Self {
        let menu_service = MenuService::new();
        let order_service = OrderService::new(menu_service.clone());
        Self {
            menu_service,
            order_service,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// 构建完整路由
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route(
            "/menu",
            get(menu::handler::list_menu).post(menu::handler::upsert_menu_item),
        )
        .route("/orders", post(order::handler::place_order))
        .route("/orders/:id", get(order::handler::get_order))
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(TimeoutLayer::new(request_timeout))
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}

/// 健康检查
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "menuItems": state.menu_service.len(),
        "orders": state.order_service.len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
