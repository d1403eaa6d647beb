//! 订单：下单、查询与状态推进

pub mod handler;
pub mod model;
pub mod service;
pub mod sweeper;

pub use model::{Order, OrderPlaced, OrderStatus, PlaceOrderRequest};
pub use service::{OrderIdGenerator, OrderService, SweepReport};
pub use sweeper::{sweep_once, Sweeper, SWEEP_INTERVAL};
