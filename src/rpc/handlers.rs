use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};

use super::protocol::{ENDPOINT_DELETE, ENDPOINT_GET, ENDPOINT_SET, RpcCode, RpcStatus, SetRequest};
use super::service::StoreService;

/// Transport status carried alongside an [`RpcStatus`] body.
pub fn transport_status(code: RpcCode) -> StatusCode {
    match code {
        RpcCode::NotFound => StatusCode::NOT_FOUND,
        RpcCode::InvalidArgument => StatusCode::BAD_REQUEST,
        RpcCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn status_response(status: RpcStatus) -> Response {
    (transport_status(status.code), Json(status)).into_response()
}

pub async fn handle_get(
    Extension(service): Extension<Arc<StoreService>>,
    Path(key): Path<String>,
) -> Response {
    match service.get(&key) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(status) => {
            tracing::debug!("Get {:?} failed: {}", key, status);
            status_response(status)
        }
    }
}

pub async fn handle_set(
    Extension(service): Extension<Arc<StoreService>>,
    Json(req): Json<SetRequest>,
) -> Response {
    match service.set(&req.key, &req.value) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(status) => {
            tracing::debug!("Set {:?} failed: {}", req.key, status);
            status_response(status)
        }
    }
}

pub async fn handle_delete(
    Extension(service): Extension<Arc<StoreService>>,
    Path(key): Path<String>,
) -> Response {
    match service.delete(&key) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(status) => {
            tracing::debug!("Delete {:?} failed: {}", key, status);
            status_response(status)
        }
    }
}

/// Builds the store service router served by `kvstored`.
pub fn router(service: Arc<StoreService>) -> Router {
    Router::new()
        .route(&format!("{}/:key", ENDPOINT_GET), get(handle_get))
        .route(ENDPOINT_SET, post(handle_set))
        .route(&format!("{}/:key", ENDPOINT_DELETE), delete(handle_delete))
        .layer(Extension(service))
}
