use async_trait::async_trait;
use thiserror::Error;

use super::protocol::{
    DeleteResponse, ENDPOINT_DELETE, ENDPOINT_GET, ENDPOINT_SET, GetResponse, RpcStatus,
    SetRequest, SetResponse,
};

/// Failure of an RPC call as seen by the gateway.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The service answered with an explicit status.
    #[error("{0}")]
    Status(RpcStatus),

    /// The call never produced a status: connection failure, undecodable
    /// response, or any other transport-level problem.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Client-side view of the store service contract.
///
/// Implemented by [`HttpStoreClient`] for the networked deployment and by
/// `StoreService` for in-process use.
#[async_trait]
pub trait StoreRpc: Send + Sync {
    async fn get(&self, key: &str) -> Result<GetResponse, RpcError>;
    async fn set(&self, key: &str, value: &str) -> Result<SetResponse, RpcError>;
    async fn delete(&self, key: &str) -> Result<DeleteResponse, RpcError>;
}

/// Typed client for the store service over its HTTP/JSON transport.
///
/// No retries: every failure is reported to the caller immediately.
pub struct HttpStoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpStoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Builds an endpoint URL carrying the key as a single path segment,
    /// percent-encoded so keys containing `/` or `%` survive the trip.
    pub(crate) fn key_url(&self, endpoint: &str, key: &str) -> Result<reqwest::Url, RpcError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|err| RpcError::Transport(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| RpcError::Transport("store service URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(endpoint.trim_start_matches('/'))
            .push(key);
        Ok(url)
    }

    /// Decodes a non-success response back into the status the service
    /// reported; anything undecodable degrades to a transport error.
    async fn decode_status(response: reqwest::Response) -> RpcError {
        let transport_status = response.status();
        match response.bytes().await {
            Ok(body) => match serde_json::from_slice::<RpcStatus>(&body) {
                Ok(status) => RpcError::Status(status),
                Err(_) => RpcError::Transport(format!(
                    "unexpected response from store service: {}",
                    transport_status
                )),
            },
            Err(err) => RpcError::Transport(err.to_string()),
        }
    }
}

#[async_trait]
impl StoreRpc for HttpStoreClient {
    async fn get(&self, key: &str) -> Result<GetResponse, RpcError> {
        let url = self.key_url(ENDPOINT_GET, key)?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| RpcError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::decode_status(response).await);
        }
        response
            .json::<GetResponse>()
            .await
            .map_err(|err| RpcError::Transport(err.to_string()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<SetResponse, RpcError> {
        let url = format!("{}{}", self.base_url, ENDPOINT_SET);
        let payload = SetRequest {
            key: key.to_string(),
            value: value.to_string(),
        };
        let response = self
            .http
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| RpcError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::decode_status(response).await);
        }
        response
            .json::<SetResponse>()
            .await
            .map_err(|err| RpcError::Transport(err.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<DeleteResponse, RpcError> {
        let url = self.key_url(ENDPOINT_DELETE, key)?;
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|err| RpcError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::decode_status(response).await);
        }
        response
            .json::<DeleteResponse>()
            .await
            .map_err(|err| RpcError::Transport(err.to_string()))
    }
}
