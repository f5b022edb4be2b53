//! Tests for `ReqwestClient`.
//!
//! Requests against real endpoints are not exercised here; these tests cover
//! construction and transport error mapping.

use super::*;

mod reqwest_client {
    use super::*;

    #[test]
    fn try_new_creates_client() {
        let client = ReqwestClient::try_new().unwrap();
        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[tokio::test]
    async fn request_to_invalid_host_returns_error_or_proxy_response() {
        let client = ReqwestClient::try_new().unwrap();
        let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();

        let result = client.request(HttpRequest::get(url)).await;

        // Behind a proxy the failure may come back as an HTTP error response.
        match result {
            Err(HttpError::Connection(_)) => {}
            Ok(resp) if !resp.is_success() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }
}
