//! Exercises [`RecordsClient`]'s response decoding against canned HTTP
//! responses served from a local socket, without a real records API.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use acadmin_client::{RecordsApi, RecordsClient};
use acadmin_common::AdminError;
use acadmin_config::ApiConfig;

/// Serve exactly one canned response on an ephemeral port and return the
/// API base URL pointing at it.
async fn one_shot_server(status_line: &str, content_type: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\n\
         Content-Type: {content_type}\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{body}",
        body.len()
    );
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 2048];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 || buf[..n].windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });
    format!("http://{addr}/api")
}

fn client(base_url: String) -> RecordsClient {
    RecordsClient::new(&ApiConfig {
        base_url,
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn success_body_decodes_into_models() {
    let base = one_shot_server(
        "200 OK",
        "application/json",
        r#"[{"shortcode": "COMSCI", "full_name": "Computer Science"}]"#,
    )
    .await;
    let degrees = client(base).list_degrees().await.unwrap();
    assert_eq!(degrees.len(), 1);
    assert_eq!(degrees[0].shortcode, "COMSCI");
}

#[tokio::test]
async fn non_2xx_json_body_becomes_a_structured_api_error() {
    let base = one_shot_server(
        "400 Bad Request",
        "application/json",
        r#"{"year": ["This field is required."]}"#,
    )
    .await;
    let err = client(base).list_degrees().await.unwrap_err();
    match err {
        AdminError::Api {
            status,
            status_text,
            detail,
        } => {
            assert_eq!(status, 400);
            assert_eq!(status_text, "Bad Request");
            assert_eq!(
                detail,
                serde_json::json!({ "year": ["This field is required."] })
            );
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_an_empty_object() {
    let base = one_shot_server(
        "500 Internal Server Error",
        "text/html",
        "<h1>Server Error</h1>",
    )
    .await;
    let err = client(base).list_degrees().await.unwrap_err();
    match err {
        AdminError::Api {
            status,
            status_text,
            detail,
        } => {
            assert_eq!(status, 500);
            assert_eq!(status_text, "Internal Server Error");
            assert_eq!(detail, serde_json::Value::Object(Default::default()));
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let base = one_shot_server("200 OK", "application/json", "not json at all").await;
    let err = client(base).list_degrees().await.unwrap_err();
    assert!(matches!(err, AdminError::Decode(_)));
}
