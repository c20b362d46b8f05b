use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yapit_ir::{HttpMethod, Payload};
use yapit_manifest::SourceSettings;
use yapit_source::{SchemaClient, SourceError};

const WITHDRAW: &str = r#"{
    "errcode": 0,
    "errmsg": "成功！",
    "data": {
        "title": "提现",
        "path": "/finance/bill_file_task/withdraw",
        "method": "POST",
        "req_body_type": "json",
        "req_body_other": "{\"type\":\"object\",\"properties\":{\"taskId\":{\"type\":\"string\"}},\"required\":[\"taskId\"]}",
        "res_body_type": "json",
        "res_body": {"type": "object", "properties": {"code": {"type": "integer"}}}
    }
}"#;

fn client(server: &MockServer, token: Option<&str>, retries: u32) -> SchemaClient {
    SchemaClient::new(SourceSettings {
        base_url: server.uri(),
        token: token.map(str::to_string),
        timeout: Duration::from_millis(500),
        retries,
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/interface/get"))
        .and(query_param("id", "4242"))
        .and(query_param("token", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string(WITHDRAW))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = client(&server, Some("secret"), 1)
        .fetch_endpoint("4242")
        .await
        .unwrap();

    assert_eq!(endpoint.title, "提现");
    assert_eq!(endpoint.method, HttpMethod::Post);
    assert!(matches!(endpoint.request, Payload::Schema(_)));
    assert!(matches!(endpoint.response, Payload::Schema(_)));
}

#[tokio::test]
async fn test_upstream_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/interface/get"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"errcode":40011,"errmsg":"请登录...","data":null}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server, None, 1)
        .fetch_interface("1")
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::Upstream(_)));
    assert_eq!(err.to_string(), "请登录...");
}

#[tokio::test]
async fn test_server_error_is_retried_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/interface/get"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/interface/get"))
        .respond_with(ResponseTemplate::new(200).set_body_string(WITHDRAW))
        .expect(1)
        .mount(&server)
        .await;

    let detail = client(&server, None, 1)
        .fetch_interface("4242")
        .await
        .unwrap();

    assert_eq!(detail.path.as_deref(), Some("/finance/bill_file_task/withdraw"));
}

#[tokio::test]
async fn test_retries_are_bounded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/interface/get"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let err = client(&server, None, 1)
        .fetch_interface("1")
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::Status { status } if status.as_u16() == 503));
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/interface/get"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server, None, 3)
        .fetch_interface("1")
        .await
        .unwrap_err();

    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/interface/get"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(WITHDRAW)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client(&server, None, 0)
        .fetch_interface("1")
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::Http { .. }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_invalid_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/interface/get"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let err = client(&server, None, 1)
        .fetch_interface("1")
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::Decode(_)));
}
