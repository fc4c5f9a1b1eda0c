use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::client::{RpcError, StoreRpc};
use super::protocol::{DeleteResponse, GetResponse, RpcStatus, SetResponse};
use crate::store::{KeyValueStore, StoreError};

/// Service adapter exposing the storage engine over the RPC contract.
///
/// Owns the only reference to the engine and the process cancellation token
/// passed into every engine call. All translation from engine outcomes to
/// [`RpcStatus`] happens here.
pub struct StoreService {
    store: Arc<dyn KeyValueStore>,
    cancel: CancellationToken,
}

impl StoreService {
    pub fn new(store: Arc<dyn KeyValueStore>, cancel: CancellationToken) -> Self {
        Self { store, cancel }
    }

    /// Returns the value for the given key, or `NotFound` if absent.
    pub fn get(&self, key: &str) -> Result<GetResponse, RpcStatus> {
        match self.store.get(&self.cancel, key) {
            Some(value) => Ok(GetResponse {
                value,
                success: true,
            }),
            None => Err(RpcStatus::not_found("key not found")),
        }
    }

    /// Stores the value for the given key.
    pub fn set(&self, key: &str, value: &str) -> Result<SetResponse, RpcStatus> {
        match self.store.set(&self.cancel, key, value) {
            Ok(()) => Ok(SetResponse { success: true }),
            Err(StoreError::EmptyKey) => Err(RpcStatus::invalid_argument("key cannot be empty")),
            Err(err) => Err(RpcStatus::internal(err.to_string())),
        }
    }

    /// Deletes the value for the given key, or `NotFound` if absent.
    ///
    /// The engine itself treats delete-of-absent-key as a no-op success;
    /// this adapter checks existence first so a missing key observably
    /// fails. The check and the delete are not atomic: a concurrent set or
    /// delete can land between them, and the reported outcome reflects the
    /// state seen by the check.
    pub fn delete(&self, key: &str) -> Result<DeleteResponse, RpcStatus> {
        if self.store.get(&self.cancel, key).is_none() {
            return Err(RpcStatus::not_found("key not found"));
        }

        match self.store.delete(&self.cancel, key) {
            Ok(()) => Ok(DeleteResponse { success: true }),
            Err(err) => Err(RpcStatus::internal(format!(
                "failed to delete key: {}",
                err
            ))),
        }
    }
}

// In-process transport: lets the gateway stack run against the service
// without a network hop.
#[async_trait]
impl StoreRpc for StoreService {
    async fn get(&self, key: &str) -> Result<GetResponse, RpcError> {
        StoreService::get(self, key).map_err(RpcError::Status)
    }

    async fn set(&self, key: &str, value: &str) -> Result<SetResponse, RpcError> {
        StoreService::set(self, key, value).map_err(RpcError::Status)
    }

    async fn delete(&self, key: &str) -> Result<DeleteResponse, RpcError> {
        StoreService::delete(self, key).map_err(RpcError::Status)
    }
}
