//! CLI integration tests against a mock characters API.
//!
//! The binary is run as a child process with MARVEL_API_BASE pointing at a
//! wiremock server, so no network access or real keys are needed.

mod common;

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{TEST_PRIVATE_KEY, TEST_PUBLIC_KEY, hulk_page, run_cli_async, stderr, stdout};

const KEYS: [&str; 4] = ["--pub", TEST_PUBLIC_KEY, "--priv", TEST_PRIVATE_KEY];

fn with_keys<'a>(args: &[&'a str]) -> Vec<&'a str> {
    let mut all = args.to_vec();
    all.extend_from_slice(&KEYS);
    all
}

async fn mount_page(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/public/characters"))
        .and(query_param("apikey", TEST_PUBLIC_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ============================================================================
// Non-interactive commands
// ============================================================================

#[tokio::test]
async fn test_search_prints_every_section() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/characters"))
        .and(query_param("apikey", TEST_PUBLIC_KEY))
        .and(query_param("nameStartsWith", "incredible hulk"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hulk_page()))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_async(&with_keys(&["search", "incredible hulk"]), &server.uri(), "").await;

    assert!(output.status.success(), "search failed: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Hulk"));
    assert!(text.contains("1009351"));
    assert!(text.contains("Incredible Hulk (1962) #1"));
    assert!(text.contains("cover"));
    assert!(text.contains("World War Hulk"));
    assert!(text.contains("Incredible Hulk (1962 - 1999)"));
    assert!(text.contains("http://marvel.com/universe/Hulk_(Bruce_Banner)"));
    assert!(text.contains("Data provided by Marvel."));
}

#[tokio::test]
async fn test_search_json_lines() {
    let server = MockServer::start().await;
    mount_page(&server, hulk_page()).await;

    let output =
        run_cli_async(&with_keys(&["search", "hulk", "--json"]), &server.uri(), "").await;

    assert!(output.status.success(), "search failed: {}", stderr(&output));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1);
    let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(record["id"], 1009351);
    assert_eq!(record["stories"]["items"][0]["type"], "cover");
}

#[tokio::test]
async fn test_list_defaults_to_first_twenty_by_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/characters"))
        .and(query_param("limit", "20"))
        .and(query_param("orderBy", "name"))
        .and(query_param_is_missing("nameStartsWith"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hulk_page()))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_async(&with_keys(&["list"]), &server.uri(), "").await;
    assert!(output.status.success(), "list failed: {}", stderr(&output));
}

#[tokio::test]
async fn test_empty_result_succeeds() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        json!({ "code": 200, "data": { "total": 0, "count": 0, "results": [] } }),
    )
    .await;

    let output = run_cli_async(&with_keys(&["search", "nobody"]), &server.uri(), "").await;

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("No characters found."));
}

#[tokio::test]
async fn test_missing_keys_fail_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hulk_page()))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_cli_async(&["search", "hulk"], &server.uri(), "").await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("No API keys configured"));
}

#[tokio::test]
async fn test_malformed_body_exits_non_zero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/characters"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": [1, 2"))
        .mount(&server)
        .await;

    let output = run_cli_async(&with_keys(&["list"]), &server.uri(), "").await;

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("decode error"));
    assert!(!err.contains("Check your API keys"));
}

#[tokio::test]
async fn test_rejected_keys_exit_non_zero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/characters"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "InvalidCredentials",
            "message": "The passed API key is invalid."
        })))
        .mount(&server)
        .await;

    let output = run_cli_async(&with_keys(&["list"]), &server.uri(), "").await;

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("401"));
    assert!(err.contains("InvalidCredentials"));
    assert!(err.contains("Check your API keys"));
}

// ============================================================================
// Interactive session
// ============================================================================

#[tokio::test]
async fn test_interactive_list_then_quit() {
    let server = MockServer::start().await;
    mount_page(&server, hulk_page()).await;

    // configured keys, list, decline another search
    let output = run_cli_async(&KEYS, &server.uri(), "\n2\nn\n").await;

    assert!(output.status.success(), "session failed: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Listing the first 20 characters"));
    assert!(text.contains("Hulk"));
    assert!(text.contains("Thanks for trying it out!"));
}

#[tokio::test]
async fn test_interactive_typed_keys_win_over_flags() {
    let server = MockServer::start().await;
    mount_page(&server, hulk_page()).await;

    let output = run_cli_async(
        &["interactive", "--pub", "flag-pub", "--priv", "flag-priv"],
        &server.uri(),
        &format!("y\n{}\n{}\n1\nhulk\nN\n", TEST_PRIVATE_KEY, TEST_PUBLIC_KEY),
    )
    .await;

    assert!(output.status.success(), "session failed: {}", stderr(&output));
    assert!(stdout(&output).contains("Hulk"));
}

#[tokio::test]
async fn test_interactive_repeats_searches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/characters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hulk_page()))
        .expect(2)
        .mount(&server)
        .await;

    let output = run_cli_async(&KEYS, &server.uri(), "n\n1\nhulk\ny\n2\nn\n").await;

    assert!(output.status.success(), "session failed: {}", stderr(&output));
    assert_eq!(stdout(&output).matches("Result #1").count(), 2);
}

#[tokio::test]
async fn test_interactive_end_of_input_is_graceful() {
    let server = MockServer::start().await;

    let output = run_cli_async(&[], &server.uri(), "").await;

    assert!(output.status.success());
}

#[tokio::test]
async fn test_interactive_fetch_error_exits_non_zero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/characters"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let output = run_cli_async(&KEYS, &server.uri(), "\n2\n").await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to fetch characters"));
}
