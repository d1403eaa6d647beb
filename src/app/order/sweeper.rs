//! 订单状态定时推进任务

use super::service::{OrderService, SweepReport};
use std::{
    panic::{self, AssertUnwindSafe},
    time::Duration,
};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant},
};
use tracing::{error, info, warn};

/// 推进周期：每分钟一次
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// 定时推进订单状态
pub struct Sweeper {
    orders: OrderService,
    period: Duration,
}

impl Sweeper {
    pub fn new(orders: OrderService) -> Self {
        Self::with_period(orders, SWEEP_INTERVAL)
    }

    pub fn with_period(orders: OrderService, period: Duration) -> Self {
        Self { orders, period }
    }

    /// 启动后台协程；第一次推进发生在一个周期之后
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// 单个协程串行执行，每次 tick 之间不会重叠
    pub async fn run(self) {
        info!("[SWEEPER] 订单状态推进任务已启动，周期 {:?}", self.period);

        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        loop {
            ticker.tick().await;
            let started = Instant::now();

            info!("[SWEEPER] 正在更新订单状态...");
            let orders = &self.orders;
            if let Some(report) = sweep_once(|| orders.advance_all()) {
                info!(
                    "[SWEEPER] 本轮检查 {} 个订单，推进 {} 个，耗时 {}ms",
                    report.visited,
                    report.advanced,
                    started.elapsed().as_millis()
                );
            }

            if started.elapsed() > self.period {
                warn!("[SWEEPER] 本轮耗时超过推进周期");
            }
        }
    }
}

/// 执行一轮推进；panic 只影响本轮，不会终止后续推进
pub fn sweep_once<F>(sweep: F) -> Option<SweepReport>
where
    F: FnOnce() -> SweepReport,
{
    match panic::catch_unwind(AssertUnwindSafe(sweep)) {
        Ok(report) => Some(report),
        Err(cause) => {
            let reason = cause
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| cause.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown".to_string());
            error!("[SWEEPER] 本轮推进异常中止: {}", reason);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{
        menu::{Category, MenuItemPayload, MenuService},
        order::model::OrderStatus,
    };

    fn order_service() -> OrderService {
        let menu = MenuService::new();
        menu.upsert(MenuItemPayload {
            id: Some("m1".to_string()),
            name: Some("Soup".to_string()),
            price: Some(5.0),
            category: Some(Category::Appetizer),
        })
        .unwrap();
        OrderService::new(menu)
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_advances_once_per_period() {
        let orders = order_service();
        let order = orders.create(vec!["m1".to_string()]).unwrap();

        let handle = Sweeper::new(orders.clone()).spawn();

        // 启动时不立即推进
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(orders.get(&order.id).unwrap().status, OrderStatus::Preparing);

        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(
            orders.get(&order.id).unwrap().status,
            OrderStatus::OutForDelivery
        );

        tokio::time::sleep(SWEEP_INTERVAL).await;
        assert_eq!(orders.get(&order.id).unwrap().status, OrderStatus::Delivered);

        tokio::time::sleep(SWEEP_INTERVAL).await;
        assert_eq!(orders.get(&order.id).unwrap().status, OrderStatus::Delivered);

        handle.abort();
    }

    #[test]
    fn test_sweep_once_survives_panic() {
        let orders = order_service();
        let order = orders.create(vec!["m1".to_string()]).unwrap();

        let failed = sweep_once(|| panic!("broken sweep"));
        assert!(failed.is_none());

        let report = sweep_once(|| orders.advance_all()).unwrap();
        assert_eq!(report, SweepReport { visited: 1, advanced: 1 });
        assert_eq!(
            orders.get(&order.id).unwrap().status,
            OrderStatus::OutForDelivery
        );
    }

    #[test]
    fn test_sweep_after_panic_inside_sweep() {
        let orders = order_service();
        let order = orders.create(vec!["m1".to_string()]).unwrap();

        // 持锁期间 panic 会让锁中毒，下一轮仍要正常推进
        let poisoned = orders.clone();
        assert!(sweep_once(move || {
            poisoned.advance_all();
            poisoned.poison_for_test();
            unreachable!()
        })
        .is_none());

        let report = sweep_once(|| orders.advance_all()).unwrap();
        assert_eq!(report.visited, 1);
        assert_eq!(orders.get(&order.id).unwrap().status, OrderStatus::Delivered);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_custom_period() {
        let orders = order_service();
        let order = orders.create(vec!["m1".to_string()]).unwrap();

        let handle = Sweeper::with_period(orders.clone(), Duration::from_millis(100)).spawn();
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(orders.get(&order.id).unwrap().status, OrderStatus::Delivered);

        handle.abort();
    }
}
