pub mod config;
pub mod error;
pub mod registry_client;
pub mod report;
pub mod room_client;

pub use config::*;
pub use error::*;
pub use registry_client::RegistryClient;
pub use report::{DEFAULT_ROOM, run_report, write_room_report};
pub use room_client::*;
