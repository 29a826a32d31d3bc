use tonic::Status;

/// 客户端传输层错误
///
/// 房间不存在不属于错误，由 `Ok(None)` 表示。
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
    #[error("gRPC error: {0}")]
    Grpc(#[from] Status),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Name not found in registry: {0}")]
    NameNotFound(String),
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
