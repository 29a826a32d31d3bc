//! Registry service module
//!
//! This module contains the name-to-endpoint directory split into logical components:
//! - `types`: Data structures and error types
//! - `service`: Core binding logic
//! - `grpc_impl`: gRPC trait implementation

pub mod types;
pub mod service;
pub mod grpc_impl;

// Re-export public types for easier access
pub use types::{Binding, RegistryError, ServiceRegistry};
pub use service::MyRegistryService;
