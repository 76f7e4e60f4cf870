use reqwest::Url;
use synochat_cli::services::synochat_sender::SynochatSender;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CLOSED_PORT_URL: &str = "http://127.0.0.1:1";

fn decode_payload(body: &[u8]) -> serde_json::Value {
    let form = String::from_utf8(body.to_vec()).unwrap();
    let url = Url::parse(&format!("http://form.local/?{}", form)).unwrap();
    let payload = url
        .query_pairs()
        .find(|(key, _)| key == "payload")
        .map(|(_, value)| value.into_owned())
        .unwrap();
    serde_json::from_str(&payload).unwrap()
}

#[tokio::test]
async fn send_posts_form_encoded_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webapi/entry.cgi"))
        .and(query_param("token", "abc"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("payload="))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"success\":true}"))
        .expect(1)
        .mount(&server)
        .await;

    let text = "**WeRSS 更新公众号**\n• 中文测试\n• 另一个公众号";
    let url = format!("{}/webapi/entry.cgi?token=abc", server.uri());
    let result = SynochatSender::send(text, &url, true).await;

    assert_eq!(result.status_code, 200);
    assert_eq!(result.snippet, "{\"success\":true}");

    let requests = server.received_requests().await.unwrap();
    let payload = decode_payload(&requests[0].body);
    assert_eq!(payload["text"], text);
}

#[tokio::test]
async fn send_truncates_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error".repeat(20)))
        .mount(&server)
        .await;

    let result = SynochatSender::send("hello", &server.uri(), false).await;

    assert_eq!(result.status_code, 500);
    assert_eq!(result.snippet.chars().count(), 200);
    assert!(result.snippet.starts_with("Internal Server Error"));
}

#[tokio::test]
async fn send_reports_connection_failure_as_status_zero() {
    let uri = CLOSED_PORT_URL.to_string();

    let result = SynochatSender::send("hello", &uri, true).await;

    assert_eq!(result.status_code, 0);
    assert!(result.snippet.starts_with("Synology Chat request failed"));
    assert!(result.snippet.chars().count() <= 200);
}
