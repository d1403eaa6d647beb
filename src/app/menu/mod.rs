//! 菜单：菜品的添加、更新与查询

pub mod handler;
pub mod model;
pub mod service;

pub use model::{Category, MenuItem, MenuItemPayload};
pub use service::MenuService;
