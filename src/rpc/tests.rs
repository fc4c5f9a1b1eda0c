//! RPC Module Tests
//!
//! Validates the service adapter's translation of engine outcomes into RPC
//! statuses, and the transport mapping of status codes.
//!
//! ## Test Scopes
//! - **Service adapter**: Get/Set/Delete status translation, including the
//!   deliberate delete-of-absent-key divergence from the engine.
//! - **Transport**: RPC code to wire status mapping and status body
//!   serialization.
//!
//! *Note: the networked client is exercised in integration against a running
//! `kvstored`; unit tests here stay in-process.*

#[cfg(test)]
mod tests {
    use crate::rpc::client::HttpStoreClient;
    use crate::rpc::handlers::transport_status;
    use crate::rpc::protocol::{ENDPOINT_DELETE, ENDPOINT_GET, RpcCode, RpcStatus};
    use crate::rpc::service::StoreService;
    use crate::store::MemoryStore;
    use axum::http::StatusCode;
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    fn service() -> StoreService {
        StoreService::new(Arc::new(MemoryStore::new()), CancellationToken::new())
    }

    // ============================================================
    // SERVICE ADAPTER - GET
    // ============================================================

    #[test]
    fn test_get_missing_key_is_not_found() {
        let service = service();

        let status = service.get("missing-key").unwrap_err();

        assert_eq!(status.code, RpcCode::NotFound);
        assert_eq!(status.message, "key not found");
    }

    #[test]
    fn test_get_after_set_returns_value() {
        let service = service();

        service.set("alpha", "one").unwrap();
        let response = service.get("alpha").unwrap();

        assert_eq!(response.value, "one");
        assert!(response.success);
    }

    #[test]
    fn test_get_empty_value_succeeds() {
        let service = service();

        // The RPC layer permits empty values; only the gateway rejects them.
        service.set("alpha", "").unwrap();
        let response = service.get("alpha").unwrap();

        assert_eq!(response.value, "");
        assert!(response.success);
    }

    // ============================================================
    // SERVICE ADAPTER - SET
    // ============================================================

    #[test]
    fn test_set_reports_success() {
        let service = service();

        let response = service.set("alpha", "one").unwrap();

        assert!(response.success);
    }

    #[test]
    fn test_set_empty_key_is_invalid_argument() {
        let service = service();

        let status = service.set("", "value").unwrap_err();

        assert_eq!(status.code, RpcCode::InvalidArgument);
        assert_eq!(status.message, "key cannot be empty");
    }

    #[test]
    fn test_set_on_cancelled_service_is_internal() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let service = StoreService::new(Arc::new(MemoryStore::new()), cancel);

        let status = service.set("alpha", "one").unwrap_err();

        assert_eq!(status.code, RpcCode::Internal);
        assert_eq!(status.message, "operation cancelled");
    }

    // ============================================================
    // SERVICE ADAPTER - DELETE
    // ============================================================

    #[test]
    fn test_delete_existing_key_reports_success() {
        let service = service();

        service.set("alpha", "one").unwrap();
        let response = service.delete("alpha").unwrap();

        assert!(response.success);
        assert_eq!(service.get("alpha").unwrap_err().code, RpcCode::NotFound);
    }

    #[test]
    fn test_delete_absent_key_is_not_found() {
        // The engine deletes absent keys silently; the adapter checks
        // existence first so the same call observably fails here.
        let service = service();

        let status = service.delete("missing-key").unwrap_err();

        assert_eq!(status.code, RpcCode::NotFound);
        assert_eq!(status.message, "key not found");
    }

    #[test]
    fn test_second_delete_is_not_found() {
        let service = service();

        service.set("alpha", "one").unwrap();
        service.delete("alpha").unwrap();

        let status = service.delete("alpha").unwrap_err();
        assert_eq!(status.code, RpcCode::NotFound);
    }

    // ============================================================
    // CLIENT URL CONSTRUCTION
    // ============================================================

    #[test]
    fn test_client_key_travels_as_single_path_segment() {
        let client = HttpStoreClient::new("http://127.0.0.1:5000");

        // A key containing a separator must not become an extra path
        // segment; the service router only matches one.
        let url = client.key_url(ENDPOINT_GET, "a/b").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/get/a%2Fb");

        let url = client.key_url(ENDPOINT_DELETE, "a/b").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/delete/a%2Fb");
    }

    #[test]
    fn test_client_plain_key_is_untouched() {
        let client = HttpStoreClient::new("http://127.0.0.1:5000/");

        let url = client.key_url(ENDPOINT_GET, "test-key_1").unwrap();

        assert_eq!(url.as_str(), "http://127.0.0.1:5000/get/test-key_1");
    }

    // ============================================================
    // TRANSPORT MAPPING
    // ============================================================

    #[test]
    fn test_transport_status_mapping() {
        assert_eq!(transport_status(RpcCode::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            transport_status(RpcCode::InvalidArgument),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            transport_status(RpcCode::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_status_body_wire_format() {
        let status = RpcStatus::not_found("key not found");

        let json = serde_json::to_string(&status).unwrap();

        assert_eq!(json, r#"{"code":"NOT_FOUND","message":"key not found"}"#);
    }
}
