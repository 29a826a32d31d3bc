use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use std::{fs, io};

/// 环境变量前缀，例如 `ROOMINFO_BIND_ADDRESS`
pub const ENV_PREFIX: &str = "ROOMINFO_";
/// 默认配置文件路径，可通过 `ROOMINFO_CONFIG` 覆盖
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 配置加载错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid environment override: {0}")]
    Env(#[from] envy::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub registry: RegistryConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 监听地址
    pub bind_address: String,
    /// 写入目录的对外地址，未设置时由监听地址推导
    pub advertise_address: Option<String>,
    /// 是否在本进程内托管名称目录
    pub host_registry: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:1099".to_string(),
            advertise_address: None,
            host_registry: true,
        }
    }
}

impl ServerConfig {
    /// 计算写入目录的服务地址
    ///
    /// 未指定地址 (0.0.0.0 / ::) 时改用回环地址，保留实际端口。
    pub fn advertise_address(&self, local_addr: SocketAddr) -> String {
        if let Some(address) = &self.advertise_address {
            return address.clone();
        }

        let mut addr = local_addr;
        if addr.ip().is_unspecified() {
            addr.set_ip(if addr.is_ipv4() {
                std::net::Ipv4Addr::LOCALHOST.into()
            } else {
                std::net::Ipv6Addr::LOCALHOST.into()
            });
        }
        format!("http://{addr}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// 名称目录地址
    pub address: String,
    /// 服务绑定名称
    pub service_name: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            address: "http://localhost:1099".to_string(),
            service_name: "RoomInfoService".to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

impl RegistryConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: false,
        }
    }
}

/// `ROOMINFO_*` 环境变量覆盖项
#[derive(Debug, Default, Deserialize)]
pub struct EnvOverrides {
    pub bind_address: Option<String>,
    pub advertise_address: Option<String>,
    pub host_registry: Option<bool>,
    pub registry_address: Option<String>,
    pub service_name: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    /// 加载 `.env`、配置文件以及环境变量覆盖
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        match std::env::var(format!("{ENV_PREFIX}CONFIG")) {
            // 显式指定的配置文件必须存在
            Ok(path) => Self::load_from(path),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from(DEFAULT_CONFIG_PATH)
            }
            Err(_) => Self::with_env_overrides(Self::default()),
        }
    }

    /// 从指定文件加载，文件不存在时返回 `ConfigError::Io`
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        Self::with_env_overrides(Self::from_toml_str(&config_str)?)
    }

    fn with_env_overrides(mut config: Self) -> Result<Self, ConfigError> {
        let overrides = envy::prefixed(ENV_PREFIX).from_env::<EnvOverrides>()?;
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(config_str)?)
    }

    pub fn apply_overrides(&mut self, overrides: EnvOverrides) {
        if let Some(v) = overrides.bind_address {
            self.server.bind_address = v;
        }
        if let Some(v) = overrides.advertise_address {
            self.server.advertise_address = Some(v);
        }
        if let Some(v) = overrides.host_registry {
            self.server.host_registry = v;
        }
        if let Some(v) = overrides.registry_address {
            self.registry.address = v;
        }
        if let Some(v) = overrides.service_name {
            self.registry.service_name = v;
        }
        if let Some(v) = overrides.connect_timeout_secs {
            self.registry.connect_timeout_secs = v;
        }
        if let Some(v) = overrides.request_timeout_secs {
            self.registry.request_timeout_secs = v;
        }
        if let Some(v) = overrides.log_level {
            self.log.level = v;
        }
    }
}
