//! Target directory policy of the one-call download entrypoint

use imgscrape::crawl_engine::StopReason;
use imgscrape::downloader::{DownloadOptions, DownloadOutcome, download, target_dir};

mod common;
use common::{create_test_dir, png_bytes, result_page, setup_mock_server};

fn options(output_dir: &std::path::Path, endpoint: String) -> DownloadOptions {
    DownloadOptions {
        limit: 5,
        output_dir: output_dir.to_path_buf(),
        timeout_secs: 5,
        verbose: false,
        search_endpoint: endpoint,
        ..DownloadOptions::default()
    }
}

#[tokio::test]
async fn test_existing_directory_is_skipped() {
    let dir = create_test_dir().unwrap();
    let existing = dir.path().join("cats");
    std::fs::create_dir_all(&existing).unwrap();

    // Nothing listens here; a skipped query must not make any request
    let outcome = download("cats", options(dir.path(), "http://127.0.0.1:1/search".into()))
        .await
        .unwrap();

    match outcome {
        DownloadOutcome::Skipped(path) => assert_eq!(path, existing),
        other => panic!("expected skip, got {other:?}"),
    }
}

#[tokio::test]
async fn test_force_replace_clears_existing_directory() {
    let mut server = setup_mock_server().await;
    server
        .mock("GET", "/images/search")
        .match_query(mockito::Matcher::Any)
        .with_body("")
        .create_async()
        .await;

    let dir = create_test_dir().unwrap();
    let existing = dir.path().join("cats");
    std::fs::create_dir_all(&existing).unwrap();
    std::fs::write(existing.join("stale.txt"), "old run").unwrap();

    let mut opts = options(dir.path(), format!("{}/images/search", server.url()));
    opts.force_replace = true;
    let outcome = download("cats", opts).await.unwrap();

    match outcome {
        DownloadOutcome::Completed { target_dir, summary } => {
            assert_eq!(target_dir, existing);
            assert_eq!(summary.stop_reason, StopReason::NoMoreResults);
        }
        other => panic!("expected a crawl, got {other:?}"),
    }
    assert!(existing.exists());
    assert!(!existing.join("stale.txt").exists());
}

#[tokio::test]
async fn test_download_saves_under_query_directory() {
    let mut server = setup_mock_server().await;
    let base = server.url();
    server
        .mock("GET", "/images/search")
        .match_query(mockito::Matcher::UrlEncoded("first".into(), "0".into()))
        .with_body(result_page(&[format!("{base}/img/owl.png")]))
        .create_async()
        .await;
    server
        .mock("GET", "/images/search")
        .match_query(mockito::Matcher::UrlEncoded("first".into(), "1".into()))
        .with_body("")
        .create_async()
        .await;
    server
        .mock("GET", "/img/owl.png")
        .with_body(png_bytes(2, 2))
        .create_async()
        .await;

    let dir = create_test_dir().unwrap();
    let mut opts = options(dir.path(), format!("{base}/images/search"));
    opts.country = Some("de".to_string());
    let outcome = download("owls", opts).await.unwrap();

    let DownloadOutcome::Completed { summary, .. } = outcome else {
        panic!("expected a crawl");
    };
    assert_eq!(summary.downloaded(), 1);
    assert!(
        dir.path()
            .join("owls/de/unknown/images/img_owl.png")
            .exists()
    );
    assert!(
        dir.path()
            .join("owls/de/unknown/metadata/owl_metadata.json")
            .exists()
    );
}

#[tokio::test]
async fn test_empty_query_is_rejected() {
    let dir = create_test_dir().unwrap();
    let result = download("  ", options(dir.path(), "http://127.0.0.1:1/search".into())).await;
    assert!(result.is_err());
}

#[test]
fn test_target_dir_sanitizes_query() {
    let dir = create_test_dir().unwrap();
    let target = target_dir(dir.path(), "cats/dogs").unwrap();
    assert_eq!(target.parent(), Some(dir.path()));
    assert!(target.is_absolute());
}

#[test]
fn test_target_dir_is_absolute_for_relative_root() {
    let target = target_dir(std::path::Path::new("dataset"), "cats").unwrap();
    assert!(target.is_absolute());
    assert!(target.ends_with("dataset/cats"));
}

#[tokio::test]
async fn test_unreadable_target_is_reported() {
    let dir = create_test_dir().unwrap();
    // A file where the output root should be makes the existence check fail
    let not_a_dir = dir.path().join("output");
    std::fs::write(&not_a_dir, "file").unwrap();

    let mut opts = options(&not_a_dir, "http://127.0.0.1:1/search".into());
    opts.force_replace = true;
    let err = download("cats", opts).await.unwrap_err();

    assert!(format!("{err:#}").contains("Failed to check target directory"));
    assert!(not_a_dir.is_file());
}
