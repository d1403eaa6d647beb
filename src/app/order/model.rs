//! 订单数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::menu::model::deserialize_item_ids;

/// 订单配送状态
///
/// 只能单向推进：Preparing -> Out for Delivery -> Delivered。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Preparing,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// 推进一步后的状态；Delivered 为终态，保持不变
    pub fn next(self) -> Self {
        match self {
            OrderStatus::Preparing => OrderStatus::OutForDelivery,
            OrderStatus::OutForDelivery => OrderStatus::Delivered,
            OrderStatus::Delivered => OrderStatus::Delivered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: String, items: Vec<String>) -> Self {
        Self {
            id,
            items,
            status: OrderStatus::Preparing,
            created_at: Utc::now(),
        }
    }

    /// 推进状态，返回是否发生了变化
    pub fn advance(&mut self) -> bool {
        let next = self.status.next();
        let changed = next != self.status;
        self.status = next;
        changed
    }
}

/// 下单请求
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(deserialize_with = "deserialize_item_ids")]
    pub items: Vec<String>,
}

/// 下单成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlaced {
    pub order_id: String,
}
