use tonic::transport::Uri;

use super::types::{Binding, RegistryError, ServiceRegistry};

// 名称目录服务
#[derive(Debug, Clone, Default)]
pub struct MyRegistryService {
    pub registry: ServiceRegistry,
}

impl MyRegistryService {
    pub fn new(registry: ServiceRegistry) -> Self {
        Self { registry }
    }

    // 绑定名称，覆盖已有绑定；返回被替换的旧绑定
    pub fn bind(&self, name: &str, address: &str) -> Result<Option<Binding>, RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        Self::validate_address(address)?;

        let binding = Binding {
            address: address.to_string(),
        };
        let previous = self.registry.insert(name.to_string(), binding);

        match &previous {
            Some(old) => tracing::info!(
                service_name = %name,
                address = %address,
                previous_address = %old.address,
                "Rebinding service"
            ),
            None => tracing::info!(
                service_name = %name,
                address = %address,
                "Binding service"
            ),
        }

        Ok(previous)
    }

    // 解析名称
    pub fn resolve(&self, name: &str) -> Result<Binding, RegistryError> {
        self.registry
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                tracing::debug!(service_name = %name, "Resolve failed, name not bound");
                RegistryError::NameNotFound {
                    name: name.to_string(),
                }
            })
    }

    // 解除绑定
    pub fn unbind(&self, name: &str) -> Result<Binding, RegistryError> {
        match self.registry.remove(name) {
            Some((_, binding)) => {
                tracing::info!(service_name = %name, "Unbound service");
                Ok(binding)
            }
            None => Err(RegistryError::NameNotFound {
                name: name.to_string(),
            }),
        }
    }

    // 所有已绑定名称，按字母排序
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    // 地址必须是可连接的 URI，例如 http://127.0.0.1:1099
    fn validate_address(address: &str) -> Result<(), RegistryError> {
        let invalid = || RegistryError::InvalidAddress {
            address: address.to_string(),
        };

        let uri: Uri = address.parse().map_err(|_| invalid())?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(invalid());
        }
        Ok(())
    }
}
