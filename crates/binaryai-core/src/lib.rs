//! Core data structures shared by the BinaryAI command-line tools.
//!
//! This crate defines the client configuration, the opaque identifiers handed
//! out by the service, the error types and the per-platform default paths
//! used by the IDA integration.

pub mod config;
pub mod error;
pub mod paths;
pub mod types;

pub use config::Config;
pub use paths::Platform;
pub use types::{FunctionId, FunctionSetId};
