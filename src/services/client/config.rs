use std::time::Duration;

use crate::config::Config;

/// 房间信息客户端配置
#[derive(Debug, Clone)]
pub struct RoomInfoClientConfig {
    /// 名称目录地址
    pub registry_address: String,
    /// 要解析的服务名称
    pub service_name: String,
    /// 默认超时时间
    pub request_timeout: Duration,
    /// 连接超时时间
    pub connect_timeout: Duration,
}

impl Default for RoomInfoClientConfig {
    fn default() -> Self {
        Self {
            registry_address: "http://localhost:1099".to_string(),
            service_name: "RoomInfoService".to_string(),
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl From<&Config> for RoomInfoClientConfig {
    fn from(config: &Config) -> Self {
        Self {
            registry_address: config.registry.address.clone(),
            service_name: config.registry.service_name.clone(),
            request_timeout: config.registry.request_timeout(),
            connect_timeout: config.registry.connect_timeout(),
        }
    }
}
