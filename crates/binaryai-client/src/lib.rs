//! Blocking client for the BinaryAI GraphQL endpoint.
//!
//! [`Client`] performs the authenticated HTTP round trip; the free functions
//! in [`function`] issue the individual queries against anything that
//! implements [`Transport`].

pub mod client;
pub mod error;
pub mod function;

pub use client::{Client, Transport};
pub use error::RemoteError;
pub use function::{create_function_set, query_function, query_function_set};
