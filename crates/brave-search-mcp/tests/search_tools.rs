use brave_search_config::ServerConfig;
use brave_search_mcp::{serve, AppState, McpServer};
use httpmock::{Method::GET, MockServer};
use serde_json::{json, Value};

fn server_for(mock: &MockServer) -> McpServer {
    let config = ServerConfig::new("it-key").with_base_url(mock.url("/res/v1"));
    let state = AppState::from_config(config).unwrap();
    McpServer::from_app_state(&state).unwrap()
}

async fn call(server: &McpServer, id: i64, name: &str, arguments: Value) -> Value {
    let message = json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": name, "arguments": arguments}
    });
    let response = server.process_message(message.to_string().as_bytes()).await.unwrap().unwrap();
    assert!(response.error.is_none());
    response.result.unwrap()
}

#[tokio::test]
async fn web_search_over_mcp_returns_ranked_text() {
    let mock = MockServer::start_async().await;
    let search = mock
        .mock_async(|when, then| {
            when.method(GET)
                .path("/res/v1/web/search")
                .header("x-subscription-token", "it-key")
                .query_param("q", "test")
                .query_param("count", "3");
            then.status(200).json_body(json!({
                "web": {"results": [
                    {"title": "One", "url": "https://one.test", "description": "first"},
                    {"title": "Two", "url": "https://two.test", "description": "second"},
                    {"title": "Three", "url": "https://three.test", "description": "third"}
                ]}
            }));
        })
        .await;

    let server = server_for(&mock);
    let result = call(&server, 1, "web_search", json!({"query": "test", "count": 3})).await;

    search.assert_async().await;
    assert_eq!(result["isError"], false);
    let text = result["content"][0]["text"].as_str().unwrap();
    let positions: Vec<usize> = ["Title: One", "Title: Two", "Title: Three"]
        .iter()
        .map(|t| text.find(t).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn provider_failure_becomes_error_envelope() {
    let mock = MockServer::start_async().await;
    mock.mock_async(|when, then| {
        when.method(GET).path("/res/v1/web/search");
        then.status(500).body("internal failure");
    })
    .await;

    let server = server_for(&mock);
    let result = call(&server, 2, "web_search", json!({"query": "test"})).await;

    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("Error: "));
    assert!(text.contains("500"));
}

#[tokio::test]
async fn local_search_falls_back_to_web_results() {
    let mock = MockServer::start_async().await;
    mock.mock_async(|when, then| {
        when.method(GET).path("/res/v1/web/search").query_param("result_filter", "locations");
        then.status(200).json_body(json!({}));
    })
    .await;
    let fallback = mock
        .mock_async(|when, then| {
            when.method(GET).path("/res/v1/web/search").query_param("offset", "0");
            then.status(200).json_body(json!({
                "web": {"results": [{"title": "Fallback", "url": "https://f.test", "description": "d"}]}
            }));
        })
        .await;

    let server = server_for(&mock);
    let result = call(&server, 3, "local_search", json!({"query": "quantum computing"})).await;

    assert_eq!(fallback.hits_async().await, 1);
    assert_eq!(result["isError"], false);
    assert!(result["content"][0]["text"].as_str().unwrap().contains("Title: Fallback"));
}

#[tokio::test]
async fn invalid_arguments_make_no_provider_calls() {
    let mock = MockServer::start_async().await;
    let any = mock
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({}));
        })
        .await;

    let server = server_for(&mock);
    let result = call(&server, 4, "local_search", json!({"count": 2})).await;

    assert_eq!(result["isError"], true);
    assert_eq!(any.hits_async().await, 0);
}

#[tokio::test]
async fn stdio_session_lists_then_calls() {
    let mock = MockServer::start_async().await;
    mock.mock_async(|when, then| {
        when.method(GET).path("/res/v1/web/search");
        then.status(200).json_body(json!({"web": {"results": []}}));
    })
    .await;

    let server = server_for(&mock);
    let input = [
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize",
               "params": {"protocolVersion": "2025-06-18", "capabilities": {},
                          "clientInfo": {"name": "it", "version": "0"}}}),
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call",
               "params": {"name": "web_search", "arguments": {"query": "zzqx"}}}),
    ]
    .iter()
    .map(Value::to_string)
    .collect::<Vec<_>>()
    .join("\n");

    let mut output = Vec::new();
    serve(&server, input.as_bytes(), &mut output).await.unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["result"]["protocolVersion"], "2025-06-18");
    assert_eq!(responses[1]["result"]["tools"][1]["name"], "local_search");
    assert_eq!(
        responses[2]["result"]["content"][0]["text"],
        "No web results found for \"zzqx\""
    );
}
