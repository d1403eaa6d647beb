//! 菜单处理器

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use tracing::{debug, info};

use super::model::{MenuItem, MenuItemPayload};
use crate::{app::AppState, core::error::CoreError};

pub const MENU_ITEM_SAVED: &str = "Menu item added/updated successfully";

/// POST /menu
pub async fn upsert_menu_item(
    State(state): State<AppState>,
    payload: Result<Json<MenuItemPayload>, JsonRejection>,
) -> Result<(StatusCode, &'static str), CoreError> {
    let Json(payload) = payload.map_err(|e| {
        debug!("菜品请求体解析失败: {}", e);
        CoreError::InvalidInput
    })?;

    let item = state.menu_service.upsert(payload)?;
    info!("菜品已保存: {} ({})", item.id, item.name);
    Ok((StatusCode::CREATED, MENU_ITEM_SAVED))
}

/// GET /menu
pub async fn list_menu(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    Json(state.menu_service.list())
}
