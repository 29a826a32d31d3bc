use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

use crate::config::{Config, ConfigError};
use crate::registry::registry_service_server::RegistryServiceServer;
use crate::roominfo::room_info_service_server::RoomInfoServiceServer;
use crate::services::client::{ClientError, RegistryClient};
use crate::services::registry::{MyRegistryService, RegistryError};
use crate::services::rooms::{LookupTable, MyRoomInfoService};

/// 服务端启动错误
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid bind address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("Remote registry error: {0}")]
    RemoteRegistry(#[from] ClientError),
}

/// 绑定配置中的监听地址并运行，直到收到 Ctrl-C
pub async fn start(config: Config) -> Result<(), ServerError> {
    let addr: SocketAddr = config.server.bind_address.parse()?;
    let listener = TcpListener::bind(addr).await?;

    serve(listener, &config, shutdown_signal()).await
}

/// 在已绑定的监听器上运行服务
///
/// 先初始化查询表并完成名称绑定，然后才开始接受请求。
pub async fn serve<F>(listener: TcpListener, config: &Config, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send,
{
    let local_addr = listener.local_addr()?;
    let advertise_address = config.server.advertise_address(local_addr);
    let service_name = &config.registry.service_name;

    // 初始化只读查询表
    let table = Arc::new(LookupTable::initialize());
    let room_service = MyRoomInfoService::new(table.clone());

    let mut router = Server::builder().add_service(RoomInfoServiceServer::new(room_service));

    if config.server.host_registry {
        let registry_service = MyRegistryService::default();
        registry_service.bind(service_name, &advertise_address)?;
        router = router.add_service(RegistryServiceServer::new(registry_service));
    } else {
        let mut registry = RegistryClient::connect(
            &config.registry.address,
            config.registry.connect_timeout(),
            config.registry.request_timeout(),
        )
        .await?;
        let replaced = registry.bind(service_name, &advertise_address).await?;
        tracing::info!(
            registry_address = %config.registry.address,
            replaced,
            "Bound service in remote registry"
        );
    }

    tracing::info!(
        local_addr = %local_addr,
        service_name = %service_name,
        address = %advertise_address,
        rooms = table.len(),
        "Room info server listening"
    );

    router
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await?;

    tracing::info!("Room info server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
