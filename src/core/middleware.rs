//! 核心中间件模块

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, Instrument};
use uuid::Uuid;

/// 请求日志中间件
///
/// 每个请求分配一个 request_id，日志都挂在这个 span 下。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let span = tracing::info_span!("request", %request_id);
    let response = next.run(req).instrument(span.clone()).await;
    let status = response.status();
    let duration = start.elapsed();

    span.in_scope(|| {
        info!(
            "{} {} - {} - {}ms - User-Agent: {:?}",
            method,
            uri,
            status,
            duration.as_millis(),
            user_agent
        );
    });

    response
}
