//! 菜单数据模型

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// 请求中的菜品 id 可以是字符串或数字，统一转换为字符串作为存储键
#[derive(Deserialize)]
#[serde(untagged)]
enum RawItemId {
    Text(String),
    Number(serde_json::Number),
}

impl RawItemId {
    /// 数字 0 等同于未提供
    fn into_key(self) -> Option<String> {
        match self {
            RawItemId::Text(s) => Some(s),
            RawItemId::Number(n) if n.as_f64() == Some(0.0) => None,
            RawItemId::Number(n) => Some(n.to_string()),
        }
    }
}

/// 单个菜品 id；`null` 与缺省视为未提供
pub fn deserialize_item_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawItemId>::deserialize(deserializer)?.and_then(RawItemId::into_key))
}

/// 菜品 id 列表；数字 0 无法对应任何菜品，保留为空字符串
pub fn deserialize_item_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = Vec::<RawItemId>::deserialize(deserializer)?;
    Ok(ids
        .into_iter()
        .map(|id| id.into_key().unwrap_or_default())
        .collect())
}

/// 菜品分类，只接受这三个固定值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Appetizer,
    #[serde(rename = "Main Course")]
    MainCourse,
    Dessert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: Category,
}

/// 添加/更新菜品请求
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MenuItemPayload {
    #[serde(default, deserialize_with = "deserialize_item_id")]
    #[validate(required, length(min = 1))]
    pub id: Option<String>,

    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, range(exclusive_min = 0.0))]
    pub price: Option<f64>,

    #[validate(required)]
    pub category: Option<Category>,
}

impl MenuItemPayload {
    /// 校验通过后转换为菜品记录，任何字段不合法都返回 None
    pub fn into_item(self) -> Option<MenuItem> {
        self.validate().ok()?;
        Some(MenuItem {
            id: self.id?,
            name: self.name?,
            price: self.price?,
            category: self.category?,
        })
    }
}
