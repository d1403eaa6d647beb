//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// 核心错误类型
///
/// 对外只暴露通用的提示文本，不区分具体是哪个字段出错。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid input")]
    InvalidInput,
    #[error("Invalid items")]
    InvalidItems,
    #[error("Order not found")]
    NotFound,
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::InvalidInput | CoreError::InvalidItems => StatusCode::BAD_REQUEST,
            CoreError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
