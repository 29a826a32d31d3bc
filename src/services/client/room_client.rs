use tonic::transport::Channel;

use super::registry_client::{RegistryClient, connect_channel};
use super::{ClientError, RoomInfoClientConfig};
use crate::roominfo::{RoomQuery, room_info_service_client::RoomInfoServiceClient};
use crate::services::rooms::{RoomRecord, WardenContact};

/// 房间信息客户端
#[derive(Debug, Clone)]
pub struct RoomInfoClient {
    address: String,
    client: RoomInfoServiceClient<Channel>,
}

impl RoomInfoClient {
    /// 通过名称目录解析服务地址并建立连接
    pub async fn resolve(config: &RoomInfoClientConfig) -> Result<Self, ClientError> {
        let mut registry = RegistryClient::connect(
            &config.registry_address,
            config.connect_timeout,
            config.request_timeout,
        )
        .await?;
        let address = registry.resolve(&config.service_name).await?;

        tracing::debug!(
            service_name = %config.service_name,
            address = %address,
            "Resolved service"
        );

        Self::connect(&address, config).await
    }

    /// 跳过名称目录，直接连接到服务地址
    pub async fn connect(address: &str, config: &RoomInfoClientConfig) -> Result<Self, ClientError> {
        let channel = connect_channel(address, config.connect_timeout, config.request_timeout).await?;

        Ok(Self {
            address: address.to_string(),
            client: RoomInfoServiceClient::new(channel),
        })
    }

    /// 服务端地址
    pub fn address(&self) -> &str {
        &self.address
    }

    /// 查询房间信息，房间不存在时返回 `Ok(None)`
    pub async fn get_room_info(&mut self, room_number: &str) -> Result<Option<RoomRecord>, ClientError> {
        let reply = self
            .client
            .get_room_info(RoomQuery {
                room_number: room_number.to_string(),
            })
            .await?
            .into_inner();

        reply
            .room
            .map(RoomRecord::try_from)
            .transpose()
            .map_err(|e| ClientError::Serialization(e.to_string()))
    }

    /// 查询房间对应的宿管联系方式，房间不存在时返回 `Ok(None)`
    pub async fn get_warden_contact(
        &mut self,
        room_number: &str,
    ) -> Result<Option<WardenContact>, ClientError> {
        let reply = self
            .client
            .get_warden_contact(RoomQuery {
                room_number: room_number.to_string(),
            })
            .await?
            .into_inner();

        Ok(reply.warden.map(WardenContact::from))
    }
}
