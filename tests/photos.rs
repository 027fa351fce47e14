mod common;

use std::sync::Arc;
use http::StatusCode;
use tempfile::tempdir;
use yelp_harvest::{PhotoCache, PhotoRecord, PhotoReport};
use common::ScriptedTransport;

fn photos() -> Vec<PhotoRecord> {
    vec![
        PhotoRecord::new("sushi-dai", "https://example.com/a.jpg"),
        PhotoRecord::new("sushi-dai", "https://example.com/b.jpg"),
        PhotoRecord::new("le-comptoir", "https://example.com/c.jpg"),
    ]
}

#[tokio::test]
async fn downloads_into_a_created_directory() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("photos");
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_get(StatusCode::OK, b"first");

    let cache = PhotoCache::new(transport.clone(), &target);
    let report = cache.materialize(&photos()).await.unwrap();

    assert_eq!(report, PhotoReport { downloaded: 3, skipped: 0, failed: 0 });
    let first = target.join("sushi-dai_7cff6e664a8bf6783610a2814043d343.jpg");
    assert_eq!(std::fs::read(first).unwrap(), b"first");
    assert_eq!(std::fs::read_dir(&target).unwrap().count(), 3);
}

#[tokio::test]
async fn second_run_downloads_nothing() {
    let dir = tempdir().unwrap();
    let transport = Arc::new(ScriptedTransport::new());
    let cache = PhotoCache::new(transport.clone(), dir.path());

    cache.materialize(&photos()).await.unwrap();
    assert_eq!(transport.get_count(), 3);
    let before: Vec<_> = photos().iter().map(|p| std::fs::read(cache.path_for(p)).unwrap()).collect();

    let report = cache.materialize(&photos()).await.unwrap();

    assert_eq!(report, PhotoReport { downloaded: 0, skipped: 3, failed: 0 });
    assert_eq!(transport.get_count(), 3);
    let after: Vec<_> = photos().iter().map(|p| std::fs::read(cache.path_for(p)).unwrap()).collect();
    assert_eq!(before, after);
}

#[tokio::test]
async fn one_failed_photo_does_not_stop_the_batch() {
    let dir = tempdir().unwrap();
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_get(StatusCode::NOT_FOUND, b"missing");

    let cache = PhotoCache::new(transport.clone(), dir.path());
    let records = photos();
    let report = cache.materialize(&records).await.unwrap();

    assert_eq!(report, PhotoReport { downloaded: 2, skipped: 0, failed: 1 });
    assert_eq!(transport.get_count(), 3);
    assert!(!cache.path_for(&records[0]).exists());
    assert!(cache.path_for(&records[1]).exists());
    assert!(cache.path_for(&records[2]).exists());

    // The failed photo is retried on the next run; the others are cached.
    let report = cache.materialize(&records).await.unwrap();
    assert_eq!(report, PhotoReport { downloaded: 1, skipped: 2, failed: 0 });
}

#[tokio::test]
async fn existing_file_is_never_requested() {
    let dir = tempdir().unwrap();
    let transport = Arc::new(ScriptedTransport::new());
    let cache = PhotoCache::new(transport.clone(), dir.path());
    let records = photos();
    std::fs::write(cache.path_for(&records[1]), b"kept").unwrap();

    cache.materialize(&records).await.unwrap();

    let requested = transport.sent_gets.lock().unwrap().clone();
    assert!(!requested.contains(&records[1].photo_url));
    assert_eq!(std::fs::read(cache.path_for(&records[1])).unwrap(), b"kept");
}
