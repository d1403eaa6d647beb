//! 订单业务服务

use super::model::Order;
use crate::{app::menu::MenuService, core::error::CoreError};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
};
use tracing::{debug, info};

/// 基于毫秒时间戳的订单号生成器
///
/// 同一毫秒内多次生成时向后顺延，保证严格递增。
#[derive(Debug, Default)]
pub struct OrderIdGenerator {
    last: AtomicI64,
}

impl OrderIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let prev = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(prev + 1).to_string()
    }
}

/// 一次状态推进的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub visited: usize,
    pub advanced: usize,
}

#[derive(Clone)]
pub struct OrderService {
    menu: MenuService,
    orders: Arc<Mutex<HashMap<String, Order>>>,
    ids: Arc<OrderIdGenerator>,
}

impl OrderService {
    pub fn new(menu: MenuService) -> Self {
        Self {
            menu,
            orders: Arc::new(Mutex::new(HashMap::new())),
            ids: Arc::new(OrderIdGenerator::new()),
        }
    }

    fn orders(&self) -> MutexGuard<'_, HashMap<String, Order>> {
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 创建订单，所有菜品 id 必须已在菜单中
    ///
    /// 空列表目前是允许的。菜单不支持删除，逐个检查即可。
    pub fn create(&self, items: Vec<String>) -> Result<Order, CoreError> {
        if let Some(unknown) = items.iter().find(|id| !self.menu.exists(id)) {
            debug!("订单包含未知菜品: {}", unknown);
            return Err(CoreError::InvalidItems);
        }

        let order = Order::new(self.ids.next_id(), items);
        self.orders().insert(order.id.clone(), order.clone());
        info!("订单已创建: {} ({} 个菜品)", order.id, order.items.len());
        Ok(order)
    }

    pub fn get(&self, id: &str) -> Result<Order, CoreError> {
        self.orders().get(id).cloned().ok_or(CoreError::NotFound)
    }

    /// 将所有订单推进一步，整个过程持有订单锁
    pub fn advance_all(&self) -> SweepReport {
        let mut orders = self.orders();
        let mut report = SweepReport::default();
        for order in orders.values_mut() {
            report.visited += 1;
            let from = order.status;
            if order.advance() {
                report.advanced += 1;
                debug!("订单 {} 状态: {:?} -> {:?}", order.id, from, order.status);
            }
        }
        report
    }

    pub fn len(&self) -> usize {
        self.orders().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders().is_empty()
    }

    /// 在持有订单锁时 panic，使锁进入中毒状态
    #[cfg(test)]
    pub(crate) fn poison_for_test(&self) {
        let _guard = self.orders();
        panic!("order lock poisoned");
    }
}
