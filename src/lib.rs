//! # 外卖订单服务
//!
//! 内存中的菜单与订单管理：
//! - 菜单：添加/更新菜品、列出菜单
//! - 订单：下单、按 id 查询
//! - 后台任务每分钟将订单状态推进一步

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{router, AppState};
pub use self::core::error::CoreError;
