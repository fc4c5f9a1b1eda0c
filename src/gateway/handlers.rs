use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use serde::{Deserialize, Serialize};

use super::validation::validate_kv_pair;
use crate::rpc::client::{RpcError, StoreRpc};
use crate::rpc::protocol::RpcCode;

#[derive(Deserialize)]
pub struct GetParams {
    pub key: Option<String>,
}

/// The key-value pair accepted on `POST /store`.
///
/// Missing fields decode as empty strings and are caught by validation, so
/// only malformed JSON reports a decode failure.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KvPair {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValueResponse {
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Maps an RPC failure to the public HTTP status and body.
///
/// Explicit statuses keep their message; everything else, including
/// transport failures, degrades to an opaque 500.
pub fn rpc_error_to_http(err: &RpcError) -> (StatusCode, String) {
    match err {
        RpcError::Status(status) => match status.code {
            RpcCode::NotFound => (StatusCode::NOT_FOUND, status.message.clone()),
            RpcCode::InvalidArgument => (StatusCode::BAD_REQUEST, status.message.clone()),
            RpcCode::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Unknown error".to_string()),
        },
        RpcError::Transport(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Unknown error".to_string()),
    }
}

/// `GET /store?key=K`
pub async fn handle_get(
    Extension(store): Extension<Arc<dyn StoreRpc>>,
    Query(params): Query<GetParams>,
) -> Response {
    // An empty parameter means the same as an absent one.
    let key = match params.key {
        Some(key) if !key.is_empty() => key,
        _ => return (StatusCode::BAD_REQUEST, "Missing key".to_string()).into_response(),
    };

    match store.get(&key).await {
        Ok(resp) => (StatusCode::OK, Json(ValueResponse { value: resp.value })).into_response(),
        Err(err) => {
            tracing::debug!("Get {:?} failed: {}", key, err);
            rpc_error_to_http(&err).into_response()
        }
    }
}

/// `POST /store` with a JSON `{key, value}` body.
///
/// The body is decoded manually so a malformed payload reports 500 rather
/// than the extractor's rejection.
pub async fn handle_set(Extension(store): Extension<Arc<dyn StoreRpc>>, body: String) -> Response {
    let pair: KvPair = match serde_json::from_str(&body) {
        Ok(pair) => pair,
        Err(err) => {
            tracing::error!("Failed to decode set request: {}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to decode request".to_string(),
            )
                .into_response();
        }
    };

    // A pair that fails local validation never reaches the store service.
    if let Err(err) = validate_kv_pair(&pair.key, &pair.value) {
        tracing::debug!("Rejected pair {:?}: {}", pair.key, err);
        return (
            StatusCode::BAD_REQUEST,
            "Invalid key/value pair".to_string(),
        )
            .into_response();
    }

    match store.set(&pair.key, &pair.value).await {
        Ok(resp) => (
            StatusCode::OK,
            Json(SuccessResponse {
                success: resp.success,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::debug!("Set {:?} failed: {}", pair.key, err);
            rpc_error_to_http(&err).into_response()
        }
    }
}

/// `DELETE /store/:key` (key taken from the path, not the query).
pub async fn handle_delete(
    Extension(store): Extension<Arc<dyn StoreRpc>>,
    Path(key): Path<String>,
) -> Response {
    if key.is_empty() {
        return (StatusCode::BAD_REQUEST, "Missing key".to_string()).into_response();
    }

    match store.delete(&key).await {
        Ok(resp) => (
            StatusCode::OK,
            Json(SuccessResponse {
                success: resp.success,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::debug!("Delete {:?} failed: {}", key, err);
            rpc_error_to_http(&err).into_response()
        }
    }
}

/// Builds the public router served by `kvapi`.
pub fn router(store: Arc<dyn StoreRpc>) -> Router {
    Router::new()
        .route("/store", get(handle_get).post(handle_set))
        .route("/store/:key", delete(handle_delete))
        .layer(Extension(store))
}
