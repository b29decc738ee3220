use polyaxon_dashboard::rpc::{handle_request, RpcRequest};
use polyaxon_dashboard::{DashboardConfig, DashboardServer};
use serde_json::{json, Value};

fn request(method: &str, params: Option<Value>) -> RpcRequest {
    RpcRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(json!(1)),
        method: method.to_string(),
        params,
    }
}

fn tool_text(result: &Value) -> Value {
    let text = result["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

#[tokio::test]
async fn lists_every_helper() {
    let server = DashboardServer::new(DashboardConfig::default());
    let resp = handle_request(&server, request("tools/list", None)).await;
    let tools = resp.result.unwrap()["tools"].as_array().unwrap().clone();
    let names: Vec<_> = tools
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    for expected in [
        "urlify_project_name",
        "get_unique_name",
        "get_url",
        "get_index_name",
        "get_session",
        "handle_auth_error",
        "humanize_time_delta",
        "b64_decode_unicode",
        "delay",
    ] {
        assert!(names.iter().any(|n| n == expected), "missing {}", expected);
    }
}

#[tokio::test]
async fn job_index_name_over_rpc() {
    let server = DashboardServer::new(DashboardConfig::default());
    let resp = handle_request(
        &server,
        request(
            "tools/call",
            Some(json!({
                "name": "get_index_name",
                "arguments": { "kind": "job", "unique_name": "alice.mnist.2.14.worker.3" }
            })),
        ),
    )
    .await;
    assert!(resp.error.is_none());
    assert_eq!(tool_text(&resp.result.unwrap()), json!("alice.mnist.14.worker"));
}

#[tokio::test]
async fn external_login_url_uses_configured_base() {
    let mut config = DashboardConfig::default();
    config.api.base_url = "https://plx.example.com".to_string();
    let server = DashboardServer::new(config);
    let resp = handle_request(
        &server,
        request(
            "tools/call",
            Some(json!({ "name": "get_auth_urls", "arguments": { "external": true } })),
        ),
    )
    .await;
    let value = tool_text(&resp.result.unwrap());
    assert_eq!(value["login_url"], json!("https://plx.example.com/users/login/"));
    assert_eq!(value["logout_url"], json!("/users/logout/"));
}

#[tokio::test]
async fn humanize_over_rpc() {
    let server = DashboardServer::new(DashboardConfig::default());
    let resp = handle_request(
        &server,
        request(
            "tools/call",
            Some(json!({
                "name": "humanize_time_delta",
                "arguments": { "start": "2024-03-01T12:00:00Z", "end": "2024-03-02T13:00:00Z" }
            })),
        ),
    )
    .await;
    assert_eq!(tool_text(&resp.result.unwrap()), json!("1d 1h"));
}

#[tokio::test]
async fn malformed_base64_is_a_tool_failure() {
    let server = DashboardServer::new(DashboardConfig::default());
    let resp = handle_request(
        &server,
        request(
            "tools/call",
            Some(json!({ "name": "b64_decode_unicode", "arguments": { "value": "%%%" } })),
        ),
    )
    .await;
    assert!(resp.result.is_none());
    let err = resp.error.unwrap();
    assert_eq!(err.code, -32603);
    assert!(err.message.starts_with("Tool execution failed"));
}

#[tokio::test]
async fn invalid_arguments_return_error() {
    let server = DashboardServer::new(DashboardConfig::default());
    let resp = handle_request(
        &server,
        request(
            "tools/call",
            Some(json!({ "name": "pluralize", "arguments": "nope" })),
        ),
    )
    .await;
    assert_eq!(resp.error.unwrap().code, -32603);
}

#[tokio::test]
async fn missing_params() {
    let server = DashboardServer::new(DashboardConfig::default());
    let resp = handle_request(&server, request("tools/call", None)).await;
    assert_eq!(resp.error.unwrap().code, -32602);
}

#[tokio::test]
async fn unknown_method() {
    let server = DashboardServer::new(DashboardConfig::default());
    let resp = handle_request(&server, request("resources/list", None)).await;
    let err = resp.error.unwrap();
    assert_eq!(err.code, -32601);
    assert_eq!(err.message, "Method not found: resources/list");
}

#[tokio::test]
async fn ping_and_initialize() {
    let server = DashboardServer::new(DashboardConfig::default());
    let resp = handle_request(&server, request("ping", None)).await;
    assert_eq!(resp.result.unwrap(), json!({ "ok": true }));

    let resp = handle_request(&server, request("initialize", None)).await;
    assert_eq!(
        resp.result.unwrap()["serverInfo"]["name"],
        json!("polyaxon-dashboard")
    );
}

#[tokio::test(start_paused = true)]
async fn delay_tool_waits() {
    let server = DashboardServer::new(DashboardConfig::default());
    let start = tokio::time::Instant::now();
    let resp = handle_request(
        &server,
        request(
            "tools/call",
            Some(json!({ "name": "delay", "arguments": { "ms": 250 } })),
        ),
    )
    .await;
    assert!(start.elapsed() >= std::time::Duration::from_millis(250));
    assert_eq!(tool_text(&resp.result.unwrap()), json!({ "waited_ms": 250 }));
}
