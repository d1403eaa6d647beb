//! 日志基础设施

use super::config::LoggingConfig;
use anyhow::Result;
use std::io;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日志系统
///
/// - 按日期分割的文件日志（无颜色）
/// - 可选的控制台输出
/// - 日志级别只取自配置，不读取环境变量
///
/// 返回的 guard 需要在进程生命周期内持有，否则缓冲中的日志会丢失。
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_path)?;

    let file_appender = rolling::daily(&config.log_path, &config.file_prefix);
    let (non_blocking, guard) = non_blocking(file_appender);

    let filter = EnvFilter::try_new(&config.level)?;

    let console_layer = config
        .console_output
        .then(|| fmt::layer().with_writer(io::stdout).with_ansi(true));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false)
                .with_thread_names(true),
        )
        .with(console_layer)
        .try_init()?;

    Ok(guard)
}
