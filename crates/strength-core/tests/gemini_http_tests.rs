//! Gemini client against a local canned HTTP server.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use strength_core::llm::{GeminiClient, GenerateRequest};
use strength_core::{LLMError, LLM};

/// Serves exactly one response and returns the base URL to point the client at.
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/v1beta")
}

/// Reads headers and a `content-length` body.
async fn read_request(socket: &mut TcpStream) {
    let mut data = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        data.extend_from_slice(&chunk[..n]);

        if let Some(end) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&data[..end]).to_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if data.len() >= end + 4 + length {
                return;
            }
        }
    }
}

fn request() -> GenerateRequest {
    GenerateRequest::new("Nordic curls").with_web_search(true)
}

#[tokio::test]
async fn test_rate_limited() {
    let base = serve_once("429 Too Many Requests", r#"{"error":{"code":429}}"#).await;
    let client = GeminiClient::new("key").with_base_url(base);

    let result = client.generate(&request()).await;
    assert!(matches!(result, Err(LLMError::RateLimited)));
}

#[tokio::test]
async fn test_server_error_keeps_status_and_body() {
    let base = serve_once("500 Internal Server Error", r#"{"error":"backend down"}"#).await;
    let client = GeminiClient::new("key").with_base_url(base);

    match client.generate(&request()).await {
        Err(LLMError::ApiError { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("backend down"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let base = serve_once("200 OK", "{not json").await;
    let client = GeminiClient::new("key").with_base_url(base);

    let result = client.generate(&request()).await;
    assert!(matches!(result, Err(LLMError::ParseError(_))));
}

#[tokio::test]
async fn test_success_carries_text_and_grounding() {
    let body = r###"{
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "## Nordic"}, {"text": " curls"}]},
            "groundingMetadata": {
                "groundingChunks": [{"web": {"uri": "https://pubmed.gov/1", "title": "Trial"}}]
            }
        }]
    }"###;
    let base = serve_once("200 OK", body).await;
    let client = GeminiClient::new("key").with_base_url(base);

    let response = client.generate(&request()).await.unwrap();
    assert_eq!(response.text, "## Nordic curls");
    let sources = response.grounding.unwrap().sources();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].title, "Trial");
}
