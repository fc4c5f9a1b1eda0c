//! HTTP Gateway Module
//!
//! Implements the public REST-style surface served by `kvapi`.
//!
//! ## Core Concepts
//! - **Validation first**: Key/value shape rules run locally; a pair that
//!   fails them never produces an RPC call.
//! - **Single status mapping**: RPC statuses are translated into HTTP
//!   statuses in exactly one place (`rpc_error_to_http`), shared by all
//!   three handlers.
//! - **No state**: The gateway owns only a client handle to the store
//!   service, never the data itself.

pub mod handlers;
pub mod validation;


pub use validation::{ValidationError, validate_kv_pair};
