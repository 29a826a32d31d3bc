use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// 初始化全局日志订阅器
///
/// `RUST_LOG` 优先，否则使用配置中的日志级别。重复调用时静默忽略。
pub fn init(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(config.with_target))
        .with(filter)
        .try_init();
}
