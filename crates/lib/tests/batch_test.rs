//! # Batch Fetch Tests
//!
//! Exercises the sequential fetch loop and the aggregate output file against a
//! mock wiki server.

use anyhow::Result;
use recap::{fetch_all_episodes, BatchFetcher, FetchRequest, RecapConfig, RecapError};
use recap_test_utils::{
    episode_page, mount_page, page_without_content, setup_tracing, write_episode_csv,
};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn no_delay() -> RecapConfig {
    RecapConfig::default().with_delay(0.0)
}

fn delimiter() -> String {
    "=".repeat(70)
}

#[tokio::test]
async fn test_failed_row_is_skipped_and_order_kept() -> Result<()> {
    // --- 1. Arrange ---
    setup_tracing();
    let server = MockServer::start().await;
    mount_page(&server, "/wiki/one", 200, &episode_page(&["Elliot meets   Mr. Robot."])).await;
    mount_page(&server, "/wiki/two", 404, "Not Found").await;
    mount_page(
        &server,
        "/wiki/three",
        200,
        &episode_page(&["Angela\n  confronts Price.", "", "The hack begins."]),
    )
    .await;

    let dir = tempdir()?;
    let uri = server.uri();
    let input = write_episode_csv(
        dir.path(),
        &[
            ("S1E01", format!("{uri}/wiki/one")),
            ("S1E02", format!("{uri}/wiki/two")),
            ("S1E03", format!("{uri}/wiki/three")),
        ],
    )?;
    let output = dir.path().join("all.txt");

    // --- 2. Act ---
    let stats = fetch_all_episodes(&input, &output, no_delay()).await?;

    // --- 3. Assert ---
    assert_eq!(stats.total_episodes, 2);
    assert_eq!(stats.failed_episodes, 1);
    assert_eq!(stats.output_file, output);

    let line = delimiter();
    let expected = format!(
        "{line}\nEPISODE: S1E01\n{line}\n\nElliot meets Mr. Robot.\n\n{line}\nEPISODE: S1E03\n{line}\n\nAngela confronts Price.\nThe hack begins."
    );
    assert_eq!(fs::read_to_string(&output)?, expected);

    let first = "Elliot meets Mr. Robot.";
    let second = "Angela confronts Price.\nThe hack begins.";
    assert_eq!(
        stats.total_characters,
        first.chars().count() + second.chars().count()
    );
    assert_eq!(stats.total_words, 4 + 6);
    Ok(())
}

#[tokio::test]
async fn test_report_partitions_every_row() {
    setup_tracing();
    let server = MockServer::start().await;
    mount_page(&server, "/a", 200, &episode_page(&["Alpha."])).await;
    mount_page(&server, "/b", 200, &page_without_content()).await;
    mount_page(&server, "/c", 200, &episode_page(&["  ", ""])).await;
    mount_page(&server, "/d", 500, "boom").await;
    mount_page(&server, "/e", 200, &episode_page(&["Echo."])).await;

    let uri = server.uri();
    let requests: Vec<FetchRequest> = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|name| FetchRequest::new(name.to_uppercase(), format!("{uri}/{name}")))
        .collect();

    let fetcher = BatchFetcher::new(no_delay()).unwrap();
    let report = fetcher.run(&requests).await;

    assert_eq!(report.total(), requests.len());
    let succeeded: Vec<_> = report
        .succeeded
        .iter()
        .map(|r| r.identifier.as_str())
        .collect();
    assert_eq!(succeeded, ["A", "E"]);
    // Missing region, empty region, and server error are all plain failures.
    assert_eq!(report.failed, ["B", "C", "D"]);
}

#[tokio::test]
async fn test_unreachable_host_is_a_per_row_failure() {
    setup_tracing();
    let server = MockServer::start().await;
    mount_page(&server, "/ok", 200, &episode_page(&["Fine."])).await;

    let requests = vec![
        // Port 9 (discard) on localhost is expected to refuse connections.
        FetchRequest::new("DOWN", "http://127.0.0.1:9/unreachable"),
        FetchRequest::new("UP", format!("{}/ok", server.uri())),
    ];

    let report = BatchFetcher::new(no_delay()).unwrap().run(&requests).await;
    assert_eq!(report.failed, ["DOWN"]);
    assert_eq!(report.succeeded.len(), 1);
    assert_eq!(report.succeeded[0].content.as_deref(), Some("Fine."));
}

#[tokio::test]
async fn test_header_only_input_writes_empty_file() -> Result<()> {
    setup_tracing();
    let dir = tempdir()?;
    let input = write_episode_csv(dir.path(), &[])?;
    let output = dir.path().join("empty.txt");

    let stats = fetch_all_episodes(&input, &output, no_delay()).await?;

    assert_eq!(stats.total_episodes, 0);
    assert_eq!(stats.failed_episodes, 0);
    assert_eq!(stats.total_characters, 0);
    assert_eq!(stats.total_words, 0);
    assert_eq!(fs::metadata(&output)?.len(), 0);
    Ok(())
}

#[tokio::test]
async fn test_missing_input_aborts_before_fetching() -> Result<()> {
    setup_tracing();
    let dir = tempdir()?;
    let output = dir.path().join("never.txt");

    let result = fetch_all_episodes(dir.path().join("nope.csv"), &output, no_delay()).await;

    assert!(matches!(result, Err(RecapError::Input { .. })));
    assert!(!output.exists(), "output must not be written on input error");
    Ok(())
}

#[tokio::test]
async fn test_rerun_produces_identical_output() -> Result<()> {
    setup_tracing();
    let server = MockServer::start().await;
    mount_page(&server, "/x", 200, &episode_page(&["Same <b>text</b> every time."])).await;
    mount_page(&server, "/y", 200, &episode_page(&["Other text."])).await;

    let dir = tempdir()?;
    let uri = server.uri();
    let input = write_episode_csv(
        dir.path(),
        &[("S2E01", format!("{uri}/x")), ("S2E02", format!("{uri}/y"))],
    )?;
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    fetch_all_episodes(&input, &first, no_delay()).await?;
    fetch_all_episodes(&input, &second, no_delay()).await?;

    assert_eq!(fs::read(&first)?, fs::read(&second)?);
    Ok(())
}

#[tokio::test]
async fn test_delay_applies_after_every_request() {
    setup_tracing();
    let server = MockServer::start().await;
    mount_page(&server, "/ok", 200, &episode_page(&["Fine."])).await;
    mount_page(&server, "/gone", 404, "").await;

    let uri = server.uri();
    let requests = vec![
        FetchRequest::new("OK", format!("{uri}/ok")),
        FetchRequest::new("GONE", format!("{uri}/gone")),
    ];

    let fetcher = BatchFetcher::new(RecapConfig::default().with_delay(0.2)).unwrap();
    let started = Instant::now();
    let report = fetcher.run(&requests).await;

    assert_eq!(report.total(), 2);
    assert!(started.elapsed() >= Duration::from_millis(400));
}

#[tokio::test]
async fn test_timeout_is_a_per_row_failure() -> Result<()> {
    // --- 1. Arrange ---
    setup_tracing();
    let server = MockServer::start().await;
    mount_page(&server, "/first", 200, &episode_page(&["First."])).await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(episode_page(&["Too late."]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    mount_page(&server, "/third", 200, &episode_page(&["Third."])).await;

    let uri = server.uri();
    let requests = vec![
        FetchRequest::new("S1E01", format!("{uri}/first")),
        FetchRequest::new("S1E02", format!("{uri}/slow")),
        FetchRequest::new("S1E03", format!("{uri}/third")),
    ];
    let config = RecapConfig {
        timeout_seconds: 1,
        ..no_delay()
    };

    // --- 2. Act ---
    let report = BatchFetcher::new(config)?.run(&requests).await;

    // --- 3. Assert ---
    assert_eq!(report.failed, ["S1E02"]);
    let ids: Vec<_> = report.succeeded.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(ids, ["S1E01", "S1E03"]);
    assert_eq!(report.total(), 3);
    Ok(())
}
