use std::time::Duration;

use tonic::Code;
use tonic::transport::{Channel, Endpoint};

use super::ClientError;
use crate::registry::{
    BindRequest, ListRequest, ResolveRequest, UnbindRequest,
    registry_service_client::RegistryServiceClient,
};

/// 建立到指定地址的 gRPC 通道
pub(crate) async fn connect_channel(
    address: &str,
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<Channel, ClientError> {
    let endpoint = Endpoint::from_shared(address.to_string())?
        .connect_timeout(connect_timeout)
        .timeout(request_timeout);

    Ok(endpoint.connect().await?)
}

/// 名称目录客户端
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: RegistryServiceClient<Channel>,
}

impl RegistryClient {
    pub async fn connect(
        address: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ClientError> {
        let channel = connect_channel(address, connect_timeout, request_timeout).await?;
        Ok(Self {
            client: RegistryServiceClient::new(channel),
        })
    }

    /// 绑定名称，返回是否覆盖了旧绑定
    pub async fn bind(&mut self, name: &str, address: &str) -> Result<bool, ClientError> {
        let reply = self
            .client
            .bind(BindRequest {
                name: name.to_string(),
                address: address.to_string(),
            })
            .await?
            .into_inner();
        Ok(reply.replaced)
    }

    /// 解析名称为服务地址
    pub async fn resolve(&mut self, name: &str) -> Result<String, ClientError> {
        let request = ResolveRequest {
            name: name.to_string(),
        };
        match self.client.resolve(request).await {
            Ok(response) => Ok(response.into_inner().address),
            Err(status) if status.code() == Code::NotFound => {
                Err(ClientError::NameNotFound(name.to_string()))
            }
            Err(status) => Err(ClientError::Grpc(status)),
        }
    }

    pub async fn unbind(&mut self, name: &str) -> Result<(), ClientError> {
        let request = UnbindRequest {
            name: name.to_string(),
        };
        match self.client.unbind(request).await {
            Ok(_) => Ok(()),
            Err(status) if status.code() == Code::NotFound => {
                Err(ClientError::NameNotFound(name.to_string()))
            }
            Err(status) => Err(ClientError::Grpc(status)),
        }
    }

    pub async fn list(&mut self) -> Result<Vec<String>, ClientError> {
        Ok(self.client.list(ListRequest {}).await?.into_inner().names)
    }
}
