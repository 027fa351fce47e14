mod common;

use std::sync::Arc;
use serde_json::json;
use tempfile::tempdir;
use yelp_harvest::{run, Settings};
use common::{business, ScriptedTransport};

fn settings(data_path: &std::path::Path, format: &str) -> Settings {
    Settings::from_yaml(&format!(
        "api:\n  api_key: test\nharvest:\n  locations: [Paris]\n  max_results: 100\noutput:\n  data_path: {}\n  format: {}\n",
        data_path.display(),
        format
    ))
    .unwrap()
}

#[tokio::test]
async fn writes_tables_and_photos() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data");
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_page(json!([
        business("le-comptoir", &["https://example.com/a.jpg", "https://example.com/b.jpg"]),
        {"alias": "bare"}
    ]));

    let summary = run(&settings(&data, "csv"), transport.clone()).await.unwrap();

    assert!(!summary.already_downloaded);
    assert_eq!(summary.businesses, 2);
    assert_eq!(summary.reviews, 1);
    assert_eq!(summary.photos.downloaded, 2);

    let businesses = std::fs::read_to_string(data.join("businesses.csv")).unwrap();
    let mut lines = businesses.lines();
    assert_eq!(
        lines.next().unwrap(),
        "business_alias,business_review_count,business_rating,business_price,business_city,\
         business_state,business_postal_code,business_country,business_latitude,\
         business_longitude,business_categories,business_parent_categories"
    );
    assert!(lines.next().unwrap().starts_with("le-comptoir,10,4.5,2,Paris,75,75001,FR,"));
    assert!(lines.next().unwrap().starts_with("bare,,,0,"));

    let photos = std::fs::read_to_string(data.join("photos.csv")).unwrap();
    assert!(photos.contains("le-comptoir_7cff6e664a8bf6783610a2814043d343.jpg"));
    assert!(data.join("reviews.csv").exists());
    assert_eq!(std::fs::read_dir(data.join("photos")).unwrap().count(), 2);
}

#[tokio::test]
async fn existing_tables_skip_the_run() {
    let dir = tempdir().unwrap();
    for table in ["businesses", "reviews", "photos"] {
        std::fs::write(dir.path().join(format!("{table}.csv")), "").unwrap();
    }
    let transport = Arc::new(ScriptedTransport::new());

    let summary = run(&settings(dir.path(), "csv"), transport.clone()).await.unwrap();

    assert!(summary.already_downloaded);
    assert_eq!(transport.query_count(), 0);
    assert_eq!(transport.get_count(), 0);
}

#[tokio::test]
async fn parquet_and_json_outputs_are_written() {
    for format in ["parquet", "json"] {
        let dir = tempdir().unwrap();
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_page(json!([business("a", &[])]));

        run(&settings(dir.path(), format), transport).await.unwrap();

        for table in ["businesses", "reviews", "photos"] {
            assert!(dir.path().join(format!("{table}.{format}")).exists());
        }
    }
}

#[tokio::test]
async fn failed_harvest_writes_no_tables() {
    let dir = tempdir().unwrap();
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_query(http::StatusCode::BAD_GATEWAY, json!({}));

    let result = run(&settings(dir.path(), "csv"), transport).await;

    assert!(result.is_err());
    assert!(!dir.path().join("businesses.csv").exists());
}
