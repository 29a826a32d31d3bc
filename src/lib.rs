//! 宿舍房间信息 RPC 服务
//!
//! - `registry`/`roominfo`: 由 proto 生成的 gRPC 类型
//! - `services::registry`: 名称 -> 地址 的绑定目录
//! - `services::rooms`: 房间记录、只读查询表以及查询服务
//! - `services::client`: 通过目录解析服务并发起调用的客户端

pub mod registry {
    tonic::include_proto!("registry");
}
pub mod roominfo {
    tonic::include_proto!("roominfo");
}
pub mod config;
pub mod logging;
pub mod server;
pub mod services;
