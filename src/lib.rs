//! Key-Value Store Library
//!
//! This library crate defines the core modules shared by the two binaries
//! (`kvstored`, the store service, and `kvapi`, the HTTP gateway).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled layers:
//!
//! - **`store`**: The storage engine. A concurrency-safe in-memory mapping
//!   from string keys to string values with cancellation-aware operations.
//! - **`rpc`**: The internal request/response contract. Wraps the engine in
//!   a service adapter, defines the wire protocol (DTOs, endpoints, status
//!   codes) and provides the typed client used by the gateway.
//! - **`gateway`**: The public HTTP surface. Validates input, invokes the
//!   RPC client and translates RPC statuses into HTTP responses.
//! - **`config`**: Environment-based startup configuration for both
//!   binaries.

pub mod config;
pub mod gateway;
pub mod rpc;
pub mod store;
