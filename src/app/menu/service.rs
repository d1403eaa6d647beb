//! 菜单业务服务

use super::model::{MenuItem, MenuItemPayload};
use crate::core::error::CoreError;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::debug;

/// 内存菜单存储，按 id 覆盖写入，不支持删除
#[derive(Clone, Default)]
pub struct MenuService {
    items: Arc<Mutex<HashMap<String, MenuItem>>>,
}

impl MenuService {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> MutexGuard<'_, HashMap<String, MenuItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 校验并写入菜品；同 id 的旧记录被整体替换
    pub fn upsert(&self, payload: MenuItemPayload) -> Result<MenuItem, CoreError> {
        let item = payload.into_item().ok_or_else(|| {
            debug!("菜品校验失败");
            CoreError::InvalidInput
        })?;

        let previous = self.items().insert(item.id.clone(), item.clone());
        debug!(
            "菜品 {} 已{}",
            item.id,
            if previous.is_some() { "更新" } else { "添加" }
        );
        Ok(item)
    }

    /// 全部菜品，按 id 排序
    pub fn list(&self) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self.items().values().cloned().collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        items
    }

    pub fn exists(&self, id: &str) -> bool {
        self.items().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}
