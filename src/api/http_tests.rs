//! Tests for HTTP request/response types.

use super::{HttpRequest, HttpResponse};

fn url() -> url::Url {
    url::Url::parse("https://api-e.ecoflow.com/iot-open/sign/device/list").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let req = HttpRequest::new(http::Method::DELETE, url());

        assert_eq!(req.method, http::Method::DELETE);
        assert_eq!(req.url, url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn get_and_put_set_method() {
        assert_eq!(HttpRequest::get(url()).method, http::Method::GET);
        assert_eq!(HttpRequest::put(url()).method, http::Method::PUT);
    }

    #[test]
    fn with_body_sets_body() {
        let req = HttpRequest::put(url()).with_body(b"{}".to_vec());
        assert_eq!(req.body, Some(b"{}".to_vec()));
    }

    #[test]
    fn with_header_appends_values() {
        let req = HttpRequest::get(url())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/plain"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }
}

mod http_response {
    use super::*;

    #[test]
    fn success_status_is_detected() {
        let ok = HttpResponse::new(http::StatusCode::OK, vec![]);
        let err = HttpResponse::new(http::StatusCode::UNAUTHORIZED, vec![]);

        assert!(ok.is_success());
        assert!(!err.is_success());
    }
}
