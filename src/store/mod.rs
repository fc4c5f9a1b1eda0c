//! Storage Engine Module
//!
//! Implements the concurrency-safe in-memory key-value mapping at the bottom
//! of the stack.
//!
//! ## Core Concepts
//! - **Per-key atomicity**: Operations on different keys never block each
//!   other; a concurrent read observes either the pre- or post-state of a
//!   concurrent write, never a torn value.
//! - **Absence is not an error**: A missing key is an observable outcome
//!   (`None`) at this layer. It only becomes an error at the RPC boundary.
//! - **Cancellation**: Every operation checks its cancellation token before
//!   touching the map; a fired token aborts the call before any other check.

pub mod memory;


pub use memory::{KeyValueStore, MemoryStore, StoreError};
