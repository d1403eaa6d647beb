//! 订单处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::debug;

use super::model::{Order, OrderPlaced, PlaceOrderRequest};
use crate::{app::AppState, core::error::CoreError};

/// POST /orders
pub async fn place_order(
    State(state): State<AppState>,
    payload: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderPlaced>), CoreError> {
    let Json(request) = payload.map_err(|e| {
        debug!("订单请求体解析失败: {}", e);
        CoreError::InvalidItems
    })?;

    let order = state.order_service.create(request.items)?;
    Ok((
        StatusCode::CREATED,
        Json(OrderPlaced { order_id: order.id }),
    ))
}

/// GET /orders/:id
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, CoreError> {
    let order = state.order_service.get(&id)?;
    Ok(Json(order))
}
