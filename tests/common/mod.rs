#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use async_trait::async_trait;
use http::StatusCode;
use serde_json::{json, Value};
use yelp_harvest::{RawResponse, Result, Transport};

/// Replays canned responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    queries: Mutex<VecDeque<RawResponse>>,
    gets: Mutex<VecDeque<RawResponse>>,
    pub sent_queries: Mutex<Vec<String>>,
    pub sent_gets: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_query(&self, status: StatusCode, body: Value) {
        self.queries.lock().unwrap().push_back(RawResponse::new(status, body.to_string()));
    }

    pub fn push_page(&self, businesses: Value) {
        self.push_query(StatusCode::OK, page(businesses));
    }

    pub fn push_get(&self, status: StatusCode, body: &[u8]) {
        self.gets.lock().unwrap().push_back(RawResponse::new(status, body.to_vec()));
    }

    pub fn query_count(&self) -> usize {
        self.sent_queries.lock().unwrap().len()
    }

    pub fn get_count(&self) -> usize {
        self.sent_gets.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post_query(&self, query: &str) -> Result<RawResponse> {
        self.sent_queries.lock().unwrap().push(query.to_string());
        // Unscripted pages are empty search results.
        Ok(self
            .queries
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| RawResponse::new(StatusCode::OK, page(json!([])).to_string())))
    }

    async fn get(&self, url: &str) -> Result<RawResponse> {
        self.sent_gets.lock().unwrap().push(url.to_string());
        Ok(self
            .gets
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| RawResponse::new(StatusCode::OK, b"jpeg".to_vec())))
    }
}

pub fn page(businesses: Value) -> Value {
    json!({"data": {"search": {"business": businesses}}})
}

pub fn business(alias: &str, photos: &[&str]) -> Value {
    json!({
        "alias": alias,
        "review_count": 10,
        "rating": 4.5,
        "price": "$$",
        "location": {"city": "Paris", "state": "75", "postal_code": "75001", "country": "FR"},
        "coordinates": {"latitude": 48.86, "longitude": 2.34},
        "categories": [
            {"alias": "french", "parent_categories": [{"alias": "restaurants"}]},
            {"alias": "bistros", "parent_categories": [{"alias": "restaurants"}]}
        ],
        "photos": photos,
        "reviews": [{"text": "Lovely", "rating": 5}]
    })
}
