//! RPC Module
//!
//! Implements the internal request/response contract between the gateway and
//! the store service.
//!
//! ## Core Concepts
//! - **Protocol**: `protocol` defines the wire DTOs, endpoint paths and the
//!   RPC status codes (`NotFound`, `InvalidArgument`, `Internal`).
//! - **Service adapter**: `StoreService` wraps the storage engine and
//!   translates engine outcomes into RPC statuses. This is the only place
//!   where engine errors are mapped.
//! - **Transport**: `handlers` serves the contract over HTTP/JSON (the
//!   `kvstored` side); `client` consumes it through the `StoreRpc` trait
//!   (the gateway side). `StoreService` implements `StoreRpc` directly so
//!   the stack can also run in-process.

pub mod client;
pub mod handlers;
pub mod protocol;
pub mod service;

#[cfg(test)]
mod tests;

pub use client::{HttpStoreClient, RpcError, StoreRpc};
pub use protocol::{RpcCode, RpcStatus};
pub use service::StoreService;
