pub mod client;
pub mod registry;
pub mod rooms;

pub use client::{ClientError, RegistryClient, RoomInfoClient, RoomInfoClientConfig};
pub use registry::{Binding, MyRegistryService, RegistryError, ServiceRegistry};
pub use rooms::{LookupTable, MyRoomInfoService, RoomRecord, WardenContact};
