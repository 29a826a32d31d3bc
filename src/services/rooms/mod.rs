//! Room lookup service module
//!
//! - `types`: 房间记录与宿管联系方式
//! - `table`: 启动时填充的只读查询表
//! - `service`: 查询逻辑
//! - `grpc_impl`: gRPC trait 实现

pub mod types;
pub mod table;
pub mod service;
pub mod grpc_impl;

pub use types::{RoomRecord, WardenContact};
pub use table::LookupTable;
pub use service::MyRoomInfoService;
