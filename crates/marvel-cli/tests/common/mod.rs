use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::json;

/// Keys used by every test; the mock server checks `apikey` against this.
pub const TEST_PUBLIC_KEY: &str = "pub123";
pub const TEST_PRIVATE_KEY: &str = "priv456";

/// Run the CLI binary against `api_base`, feeding `stdin` to it.
///
/// MARVEL_* variables from the surrounding environment are removed so only
/// the arguments given here configure the run.
pub fn run_cli(args: &[&str], api_base: &str, stdin: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_marvel"));
    cmd.args(args)
        .env_remove("MARVEL_PUBLIC_KEY")
        .env_remove("MARVEL_PRIVATE_KEY")
        .env_remove("MARVEL_TIMEOUT")
        .env_remove("RUST_LOG")
        .env("MARVEL_API_BASE", api_base)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().expect("Failed to execute CLI");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for CLI")
}

/// Run the CLI on a blocking thread so the mock server keeps serving.
pub async fn run_cli_async(args: &[&str], api_base: &str, stdin: &str) -> Output {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let api_base = api_base.to_string();
    let stdin = stdin.to_string();

    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli(&args, &api_base, &stdin)
    })
    .await
    .expect("CLI task panicked")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// A one-character page as the API would send it.
pub fn hulk_page() -> serde_json::Value {
    json!({
        "code": 200,
        "status": "Ok",
        "attributionText": "Data provided by Marvel. © 2024 MARVEL",
        "data": {
            "offset": 0,
            "limit": 1,
            "total": 1,
            "count": 1,
            "results": [{
                "id": 1009351,
                "name": "Hulk",
                "description": "Caught in a gamma bomb explosion",
                "modified": "2020-07-21T10:35:15-0400",
                "resourceURI": "http://gateway.marvel.com/v1/public/characters/1009351",
                "urls": [{ "type": "wiki", "url": "http://marvel.com/universe/Hulk_(Bruce_Banner)" }],
                "comics": { "available": 1, "returned": 1, "collectionURI": "http://x/comics", "items": [
                    { "resourceURI": "http://x/comics/1", "name": "Incredible Hulk (1962) #1" }
                ]},
                "stories": { "available": 1, "returned": 1, "collectionURI": "http://x/stories", "items": [
                    { "resourceURI": "http://x/stories/2", "name": "Cover #2", "type": "cover" }
                ]},
                "events": { "available": 1, "returned": 1, "collectionURI": "http://x/events", "items": [
                    { "resourceURI": "http://x/events/3", "name": "World War Hulk" }
                ]},
                "series": { "available": 1, "returned": 1, "collectionURI": "http://x/series", "items": [
                    { "resourceURI": "http://x/series/4", "name": "Incredible Hulk (1962 - 1999)" }
                ]}
            }]
        }
    })
}
