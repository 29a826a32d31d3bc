use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;
use tonic::Status;

// 名称绑定信息
#[derive(Debug, Clone)]
pub struct Binding {
    pub address: String,
}

// 服务名 -> 绑定信息
pub type ServiceRegistry = Arc<DashMap<String, Binding>>;

/// 名称目录错误类型
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Service name must not be empty")]
    EmptyName,

    #[error("Invalid service address: {address}")]
    InvalidAddress { address: String },

    #[error("Name not bound: {name}")]
    NameNotFound { name: String },
}

impl From<RegistryError> for Status {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::EmptyName | RegistryError::InvalidAddress { .. } => {
                Status::invalid_argument(err.to_string())
            }
            RegistryError::NameNotFound { .. } => Status::not_found(err.to_string()),
        }
    }
}
