use anyhow::Context;
use food_order_service::{
    app::{self, order::Sweeper, AppState},
    infrastructure::{config::load_config, logger::init_logging},
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config()?;
    let _guard = init_logging(&config.logging)?;

    match source {
        Some(path) => info!("从配置文件加载: {}", path),
        None => info!("未找到配置文件，使用默认配置"),
    }

    info!("启动订单服务...");

    let state = AppState::new();
    let sweeper = Sweeper::new(state.order_service.clone()).spawn();
    tokio::spawn(async move {
        if let Err(e) = sweeper.await {
            error!("[SWEEPER] 订单状态推进任务异常退出: {}", e);
        }
    });

    let app = app::router(state, config.http.request_timeout());

    let addr = config.http.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 订单服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   POST   /menu         - 添加/更新菜品");
    info!("   GET    /menu         - 获取菜单");
    info!("   POST   /orders       - 下单");
    info!("   GET    /orders/:id   - 查询订单");
    info!("   GET    /health       - 健康检查");

    axum::serve(listener, app).await.context("服务器运行失败")?;
    Ok(())
}
