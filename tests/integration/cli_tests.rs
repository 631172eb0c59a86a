//! Integration tests for the command-line entry point
//!
//! These tests run the built binary against wiremock servers and check the
//! printed messages, exit status and output file.

use listing_harvester::config::config_hash;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BINARY: &str = env!("CARGO_BIN_EXE_listing-harvester");

/// Runs the binary in `dir` with the given arguments
fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(BINARY)
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run binary")
}

/// Runs the binary off the async runtime so the mock server keeps serving
async fn run_cli_blocking(dir: &Path, args: Vec<String>) -> Output {
    let dir = dir.to_path_buf();
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli(&dir, &args)
    })
    .await
    .expect("Binary runner panicked")
}

/// Writes a config file pointing the base URL at the mock server
fn write_config(dir: &Path, server: &MockServer) -> String {
    let config_path = dir.join("harvester.toml");
    let content = format!("[site]\nbase-url = \"{}/kategooria/\"\n", server.uri());
    std::fs::write(&config_path, content).expect("Failed to write config");
    config_path.display().to_string()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_missing_category_prints_usage() {
    let dir = TempDir::new().unwrap();

    for args in [vec![], vec!["/"], vec!["///"]] {
        let output = run_cli(dir.path(), &args);

        assert!(output.status.success(), "args {:?} should exit 0", args);
        let text = stdout(&output);
        assert!(text.contains("please enter a valid category"), "stdout: {}", text);
        assert!(text.contains("arvutid/sulearvutid"));
    }

    assert!(!dir.path().join("products.json").exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_unreachable_category_reports_and_exits_cleanly() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/kategooria/olematu"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"/page-\d+$"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &server);
    let output_file = dir.path().join("products.json");

    let output = run_cli_blocking(
        dir.path(),
        vec![
            "-q".to_string(),
            "--config".to_string(),
            config,
            "olematu".to_string(),
            output_file.display().to_string(),
        ],
    )
    .await;

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("URL checking failed"), "stdout: {}", text);
    assert!(text.contains("404"));
    assert!(!output_file.exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_malformed_first_page_exits_with_failure() {
    let server = MockServer::start().await;

    // Reachable, but without any listing containers or page counter
    Mock::given(method("GET"))
        .and(path("/kategooria/arvutid"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>Hooldustööd</p></body></html>")
                .insert_header("content-type", "text/html"),
        )
        .expect(2)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &server);
    let output_file = dir.path().join("products.json");

    let output = run_cli_blocking(
        dir.path(),
        vec![
            "-q".to_string(),
            "--config".to_string(),
            config,
            "/arvutid".to_string(),
            output_file.display().to_string(),
        ],
    )
    .await;

    assert!(!output.status.success());
    assert!(!output_file.exists());
}

#[test]
fn test_dry_run_shows_config_hash() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("harvester.toml");
    let content = "[site]\nbase-url = \"https://shop.example.com/category/\"\n";
    std::fs::write(&config_path, content).unwrap();

    let output = run_cli(
        dir.path(),
        &[
            "-q",
            "--dry-run",
            "--config",
            config_path.to_str().unwrap(),
            "arvutid",
        ],
    );

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("https://shop.example.com/category/arvutid"), "stdout: {}", text);
    assert!(text.contains(&config_hash(content)));
    assert!(!dir.path().join("products.json").exists());
}
